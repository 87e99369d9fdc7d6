// Strategies for property tests.
//
// Polygons are drawn from a seed rather than shrunk point by point: shrinking
// a vertex of a simple polygon easily makes it self-intersecting, so a failing
// case is reported with its seed instead.
use crate::data::Polygon;

use core::ops::Range;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::f64::consts::{PI, TAU};

///////////////////////////////////////////////////////////////////////////////
// Simple polygons

/// Clockwise star-shaped polygons with a vertex count drawn from `size`.
pub fn star_polygon(size: Range<usize>) -> impl Strategy<Value = Polygon<f64>> {
  (size, any::<u64>()).prop_map(|(n, seed)| {
    let mut rng = SmallRng::seed_from_u64(seed);
    Polygon::random_star(n, &mut rng)
  })
}

///////////////////////////////////////////////////////////////////////////////
// Rings with a hole

/// A regular outer ring around the origin and a regular hole strictly inside
/// its incircle.
pub fn annulus() -> impl Strategy<Value = (Polygon<f64>, Polygon<f64>)> {
  (
    (3_usize..12, 5.0..50.0, 0.0..TAU),
    (3_usize..12, 0.05..0.8, 0.0..TAU),
    (0.0..0.9, 0.0..TAU),
  )
    .prop_map(
      |((n, radius, rotation), (k, hole_scale, hole_rotation), (offset_scale, offset_angle))| {
        let inradius = radius * (PI / n as f64).cos();
        let hole_radius = hole_scale * inradius;
        let offset = offset_scale * (inradius - hole_radius);
        let center = [offset * offset_angle.cos(), offset * offset_angle.sin()];
        (
          Polygon::regular(n, radius, rotation, [0.0, 0.0]),
          Polygon::regular(k, hole_radius, hole_rotation, center),
        )
      },
    )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Tolerance;
  use test_strategy::proptest;

  #[proptest]
  fn star_polygons_are_clockwise(#[strategy(star_polygon(3..32))] poly: Polygon<f64>) {
    assert!(poly.len() >= 3);
    assert!(poly.signed_area() < 0.0);
  }

  #[proptest]
  fn holes_lie_inside(#[strategy(annulus())] rings: (Polygon<f64>, Polygon<f64>)) {
    let tol = Tolerance::default();
    let (outer, hole) = rings;
    for pt in hole.points() {
      assert!(outer.contains_point(pt, &tol));
    }
  }
}
