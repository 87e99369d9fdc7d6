//! Triangulation of simple polygons by repeated vertex splitting.
//!
//! A vertex is *divisible* when it is convex and the triangle it forms with its
//! two neighbours contains no other remaining vertex. Splitting it off emits
//! that triangle and leaves a simple polygon with one vertex fewer. Once the
//! remainder is convex it is finished with a fan.
//!
//! Convexity is decided by ray casting: a vertex is reflex when it lies inside
//! the polygon formed without it. Each round scans the ring from the start and
//! stops at the first reflex vertex; the vertices before it are remembered as
//! convex so the search for a divisible vertex does not test them again.
use num_traits::Float;

use super::fan::fan_into;
use super::Incomplete;
use crate::data::polygon::{open_len, point_in_polygon};
use crate::data::{Point, TriangleView};
use crate::{Error, Tolerance};

// The vertices still to be triangulated, as positions into the input ring.
struct LiveRing<'a, T, const N: usize> {
  positions: &'a [Point<T, N>],
  live: Vec<usize>,
}

impl<'a, T, const N: usize> LiveRing<'a, T, N>
where
  T: Float,
{
  fn new(positions: &'a [Point<T, N>], len: usize) -> Self {
    LiveRing {
      positions,
      live: (0..len).collect(),
    }
  }

  fn len(&self) -> usize {
    self.live.len()
  }

  fn point(&self, i: usize) -> &'a Point<T, N> {
    &self.positions[self.live[i]]
  }

  fn prev(&self, i: usize) -> usize {
    (i + self.len() - 1) % self.len()
  }

  fn next(&self, i: usize) -> usize {
    (i + 1) % self.len()
  }

  fn is_reflex(&self, i: usize, tol: &Tolerance) -> bool {
    let rest = (0..self.len()).filter(|&j| j != i).map(|j| self.point(j));
    point_in_polygon(self.point(i), rest, tol)
  }

  fn is_fragment(&self, i: usize, tol: &Tolerance) -> bool {
    let (prev, next) = (self.prev(i), self.next(i));
    let trig = TriangleView::new([self.point(prev), self.point(i), self.point(next)]);
    (0..self.len())
      .filter(|&j| j != prev && j != i && j != next)
      .all(|j| !trig.contains(self.point(j), tol))
  }

  // Index of the first reflex vertex, or None if the ring is convex.
  fn first_reflex(&self, tol: &Tolerance) -> Option<usize> {
    (0..self.len()).find(|&i| self.is_reflex(i, tol))
  }

  fn find_divisible(&self, first_reflex: usize, tol: &Tolerance) -> Option<usize> {
    (0..self.len()).find(|&i| {
      if i < first_reflex {
        self.is_fragment(i, tol)
      } else if i == first_reflex {
        false
      } else {
        !self.is_reflex(i, tol) && self.is_fragment(i, tol)
      }
    })
  }
}

/// Triangulate a clockwise simple polygon.
///
/// `indices[i]` is the index written for `positions[i]`. If no vertex can be
/// split off, the triangles found so far are returned inside the error.
pub fn triangulate<T, const N: usize>(
  positions: &[Point<T, N>],
  indices: &[usize],
  tol: &Tolerance,
) -> Result<Vec<usize>, Incomplete>
where
  T: Float,
{
  if positions.len() != indices.len() {
    return Err(Error::MismatchedIndices.into());
  }
  let len = open_len(positions, tol);
  if len < 3 {
    log::debug!("simple polygon: {} vertices after closing duplicate", len);
    return Err(Error::InsufficientVertices.into());
  }

  let mut ring = LiveRing::new(positions, len);
  let mut out = Vec::with_capacity(3 * (len - 2));
  loop {
    if ring.len() <= 3 {
      fan_into(ring.len(), |i| indices[ring.live[i]], &mut out);
      return Ok(out);
    }
    let first_reflex = match ring.first_reflex(tol) {
      None => {
        log::trace!("remaining {} vertices are convex", ring.len());
        fan_into(ring.len(), |i| indices[ring.live[i]], &mut out);
        return Ok(out);
      }
      Some(i) => i,
    };
    match ring.find_divisible(first_reflex, tol) {
      None => {
        log::debug!(
          "no divisible vertex among {} remaining, {} triangles emitted",
          ring.len(),
          out.len() / 3
        );
        return Err(Incomplete::new(Error::NoDivisibleVertex, out));
      }
      Some(i) => {
        let (prev, next) = (ring.prev(i), ring.next(i));
        out.extend([
          indices[ring.live[prev]],
          indices[ring.live[i]],
          indices[ring.live[next]],
        ]);
        log::trace!("split off vertex {}", indices[ring.live[i]]);
        ring.live.remove(i);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Polygon;
  use crate::testing::*;
  use claims::{assert_err, assert_ok, assert_ok_eq};
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use std::collections::BTreeSet;
  use test_strategy::proptest;

  fn ring(pts: &[[f64; 2]]) -> Vec<Point<f64>> {
    pts.iter().copied().map(Point::new).collect()
  }

  fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
  }

  fn covered_area(pts: &[Point<f64>], triangles: &[usize]) -> f64 {
    triangles
      .chunks(3)
      .map(|t| TriangleView::from_indices(pts, [t[0], t[1], t[2]]).signed_area())
      .sum()
  }

  #[test]
  fn square_is_a_fan() {
    let tol = Tolerance::default();
    let pts = ring(&[[0., 0.], [0., 5.], [5., 5.], [5., 0.]]);
    assert_ok_eq!(triangulate(&pts, &identity(4), &tol), vec![0, 1, 2, 0, 2, 3]);
  }

  #[test]
  fn single_triangle() {
    let tol = Tolerance::default();
    let pts = ring(&[[0., 0.], [0., 5.], [5., 5.]]);
    assert_ok_eq!(triangulate(&pts, &[4, 2, 9], &tol), vec![4, 2, 9]);
  }

  #[test]
  fn arrow() {
    let tol = Tolerance::default();
    let pts = ring(&[[0., 0.], [1., 2.], [2., 0.], [1., 1.]]);
    assert_ok_eq!(triangulate(&pts, &identity(4), &tol), vec![3, 0, 1, 1, 2, 3]);
    assert_ok_eq!(
      triangulate(&pts, &[0, 10, 20, 30], &tol),
      vec![30, 0, 10, 10, 20, 30]
    );
  }

  #[test]
  fn l_shape() {
    let tol = Tolerance::default();
    let pts = ring(&[[0., 0.], [0., 3.], [1., 3.], [1., 1.], [3., 1.], [3., 0.]]);
    let out = assert_ok!(triangulate(&pts, &identity(6), &tol));
    assert_eq!(out, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5]);
    assert_eq!(covered_area(&pts, &out), -5.0);
  }

  #[test]
  fn u_shape() {
    let tol = Tolerance::default();
    let pts = ring(&[
      [0., 0.],
      [0., 3.],
      [1., 3.],
      [1., 1.],
      [2., 1.],
      [2., 3.],
      [3., 3.],
      [3., 0.],
    ]);
    let out = assert_ok!(triangulate(&pts, &identity(8), &tol));
    assert_eq!(
      out,
      vec![0, 1, 2, 0, 2, 3, 7, 0, 3, 7, 3, 4, 4, 5, 6, 4, 6, 7]
    );
    assert_eq!(covered_area(&pts, &out), -7.0);
  }

  #[test]
  fn closed_ring_matches_open_ring() {
    let tol = Tolerance::default();
    let open = ring(&[[1., 1.], [3., 1.], [3., 0.], [0., 0.], [0., 3.], [1., 3.]]);
    let mut closed = open.clone();
    closed.push(open[0]);
    let expected = assert_ok!(triangulate(&open, &identity(6), &tol));
    assert_eq!(expected.len(), 12);
    assert_ok_eq!(triangulate(&closed, &identity(7), &tol), expected);
  }

  #[test]
  fn errors() {
    let tol = Tolerance::default();
    let pts = ring(&[[0., 0.], [1., 1.]]);
    let err = assert_err!(triangulate(&pts, &identity(2), &tol));
    assert_eq!(err.kind(), Error::InsufficientVertices);
    let err = assert_err!(triangulate(&pts, &identity(3), &tol));
    assert_eq!(err.kind(), Error::MismatchedIndices);
  }

  #[test]
  fn random_star_is_covered() {
    let tol = Tolerance::default();
    let mut rng = SmallRng::seed_from_u64(0);
    for n in 3..40 {
      let poly = Polygon::random_star(n, &mut rng);
      let out = assert_ok!(triangulate(poly.points(), &identity(n), &tol));
      assert_eq!(out.len(), 3 * (n - 2));
      assert!((covered_area(poly.points(), &out) - poly.signed_area()).abs() < 1e-6);
    }
  }

  #[proptest]
  fn star_triangulation_prop(#[strategy(star_polygon(3..24))] poly: Polygon<f64>) {
    let tol = Tolerance::default();
    let n = poly.len();
    let out = triangulate(poly.points(), &identity(n), &tol).unwrap();
    assert_eq!(out.len(), 3 * (n - 2));
    for t in out.chunks(3) {
      assert!(t.iter().all(|&i| i < n));
      assert_eq!(t.iter().collect::<BTreeSet<_>>().len(), 3);
      let trig = TriangleView::from_indices(poly.points(), [t[0], t[1], t[2]]);
      assert!(trig.orientation(&tol).is_cw());
    }
    let area = covered_area(poly.points(), &out);
    assert!((area - poly.signed_area()).abs() < 1e-6);
  }

  #[proptest]
  fn deterministic_prop(#[strategy(star_polygon(3..24))] poly: Polygon<f64>) {
    let tol = Tolerance::default();
    let indices: Vec<usize> = (0..poly.len()).map(|i| 3 * i + 1).collect();
    assert_eq!(
      triangulate(poly.points(), &indices, &tol),
      triangulate(poly.points(), &indices, &tol)
    );
  }
}
