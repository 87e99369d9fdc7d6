//! Polygon triangulation.
//!
//! All entry points expect clockwise rings on the XY plane and emit a flat
//! list of indices, three per clockwise triangle. A ring may repeat its first
//! point at the end; the duplicate is ignored.
//!
//! Failures are reported through [`Incomplete`], which keeps whatever
//! triangles were found before the algorithm gave up.
use num_traits::Float;

use crate::data::{IndexedPolygon, Point, Polygon};
use crate::{Error, Tolerance};

pub mod divisible;
pub mod fan;
pub mod hole;

/// A failed triangulation together with the triangles recovered before the
/// failure.
///
/// ```rust
/// # use ringtri::algorithms::triangulation::triangulate_convex;
/// # use ringtri::data::Point;
/// # use ringtri::Error;
/// let line = [Point::new([0.0, 0.0]), Point::new([1.0, 1.0])];
/// let err = triangulate_convex(&line, &[0, 1]).unwrap_err();
/// assert_eq!(err.kind(), Error::InsufficientVertices);
/// assert!(err.partial().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incomplete {
  kind: Error,
  partial: Vec<usize>,
}

impl Incomplete {
  pub fn new(kind: Error, partial: Vec<usize>) -> Incomplete {
    debug_assert_eq!(partial.len() % 3, 0);
    Incomplete { kind, partial }
  }

  pub fn kind(&self) -> Error {
    self.kind
  }

  /// Flat index list of the triangles found before the failure.
  pub fn partial(&self) -> &[usize] {
    &self.partial
  }

  pub fn into_partial(self) -> Vec<usize> {
    self.partial
  }
}

impl From<Error> for Incomplete {
  fn from(kind: Error) -> Incomplete {
    Incomplete::new(kind, Vec::new())
  }
}

impl std::fmt::Display for Incomplete {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(
      f,
      "{} ({} triangles recovered)",
      self.kind,
      self.partial.len() / 3
    )
  }
}

impl std::error::Error for Incomplete {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.kind)
  }
}

/// Entry point carrying the tolerance used by every geometric predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangulator {
  tolerance: Tolerance,
}

impl Triangulator {
  pub fn new(tolerance: Tolerance) -> Triangulator {
    Triangulator { tolerance }
  }

  pub fn tolerance(&self) -> &Tolerance {
    &self.tolerance
  }

  /// Fan from the first vertex. `indices[i]` is written for `positions[i]`.
  /// Assumes the polygon is convex.
  pub fn convex<T, const N: usize>(
    &self,
    positions: &[Point<T, N>],
    indices: &[usize],
  ) -> Result<Vec<usize>, Incomplete>
  where
    T: Float,
  {
    fan::triangulate(positions, indices, &self.tolerance)
  }

  /// Triangulate a simple polygon, convex or not, by splitting off divisible
  /// vertices until the remainder is convex.
  pub fn simple_polygon<T, const N: usize>(
    &self,
    positions: &[Point<T, N>],
    indices: &[usize],
  ) -> Result<Vec<usize>, Incomplete>
  where
    T: Float,
  {
    divisible::triangulate(positions, indices, &self.tolerance)
  }

  /// Triangulate the area between `outer` and a `hole` inside it.
  ///
  /// Outer vertices are numbered `0..m` and hole vertices `m..m + k`, where `m`
  /// and `k` are the ring lengths without closing duplicates.
  pub fn with_hole<T, const N: usize>(
    &self,
    outer: &[Point<T, N>],
    hole: &[Point<T, N>],
  ) -> Result<Vec<usize>, Incomplete>
  where
    T: Float,
  {
    hole::triangulate(outer, hole, &self.tolerance)
  }
}

pub fn triangulate_convex<T, const N: usize>(
  positions: &[Point<T, N>],
  indices: &[usize],
) -> Result<Vec<usize>, Incomplete>
where
  T: Float,
{
  Triangulator::default().convex(positions, indices)
}

pub fn triangulate_simple_polygon<T, const N: usize>(
  positions: &[Point<T, N>],
  indices: &[usize],
) -> Result<Vec<usize>, Incomplete>
where
  T: Float,
{
  Triangulator::default().simple_polygon(positions, indices)
}

pub fn triangulate_with_hole<T, const N: usize>(
  outer: &[Point<T, N>],
  hole: &[Point<T, N>],
) -> Result<Vec<usize>, Incomplete>
where
  T: Float,
{
  Triangulator::default().with_hole(outer, hole)
}

pub trait Triangulate {
  fn triangulate(self) -> Result<Vec<usize>, Incomplete>;
}

// Polygon-local indices.
impl<'a, T: Float, const N: usize> Triangulate for &'a Polygon<T, N> {
  fn triangulate(self) -> Result<Vec<usize>, Incomplete> {
    let indices: Vec<usize> = (0..self.len()).collect();
    triangulate_simple_polygon(self.points(), &indices)
  }
}

impl<'a, T: Float, const N: usize> Triangulate for IndexedPolygon<'a, T, N> {
  fn triangulate(self) -> Result<Vec<usize>, Incomplete> {
    triangulate_simple_polygon(self.positions(), self.indices())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::TriangleView;
  use claims::{assert_err, assert_ok, assert_ok_eq};

  fn ring(pts: &[[f64; 2]]) -> Vec<Point<f64>> {
    pts.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn incomplete_reports_kind_and_partial() {
    let err = Incomplete::new(Error::NoDivisibleVertex, vec![0, 1, 2]);
    assert_eq!(err.kind(), Error::NoDivisibleVertex);
    assert_eq!(err.partial(), &[0, 1, 2]);
    assert_eq!(err.to_string(), "No divisible vertex (1 triangles recovered)");
    assert_eq!(err.into_partial(), vec![0, 1, 2]);
    assert_eq!(Incomplete::from(Error::UnresolvedHole).partial().len(), 0);
  }

  #[test]
  fn triangulate_polygon_uses_local_indices() {
    let poly = Polygon::new_unchecked(ring(&[[0., 0.], [1., 2.], [2., 0.], [1., 1.]]));
    assert_ok_eq!(poly.triangulate(), vec![3, 0, 1, 1, 2, 3]);
  }

  #[test]
  fn triangulate_indexed_polygon_uses_external_indices() {
    let pts = ring(&[[0., 0.], [1., 2.], [2., 0.], [1., 1.]]);
    let poly = assert_ok!(IndexedPolygon::new(&pts, &[10, 11, 12, 13]));
    assert_ok_eq!(poly.triangulate(), vec![13, 10, 11, 11, 12, 13]);
  }

  #[test]
  fn custom_tolerance_reaches_predicates() {
    // With a huge epsilon the last vertex reads as a closing duplicate of the
    // first one, leaving only two.
    let coarse = Triangulator::new(Tolerance::new(100.0));
    let pts = ring(&[[0., 0.], [0., 5.], [5., 5.]]);
    assert_ok_eq!(Triangulator::default().convex(&pts, &[0, 1, 2]), vec![0, 1, 2]);
    let err = assert_err!(coarse.convex(&pts, &[0, 1, 2]));
    assert_eq!(err.kind(), Error::InsufficientVertices);
    assert_eq!(Triangulator::default().tolerance().epsilon(), crate::EPSILON);
  }

  #[test]
  fn output_is_clockwise_for_every_entry_point() {
    let tol = Tolerance::default();
    let square = ring(&[[0., 0.], [0., 5.], [5., 5.], [5., 0.]]);
    let hole = ring(&[[2., 2.], [2., 3.], [3., 3.], [3., 2.]]);
    let buffer: Vec<Point<f64>> = square.iter().chain(&hole).copied().collect();

    let convex = assert_ok!(triangulate_convex(&square, &[0, 1, 2, 3]));
    let simple = assert_ok!(triangulate_simple_polygon(&square, &[0, 1, 2, 3]));
    let holed = assert_ok!(triangulate_with_hole(&square, &hole));
    for indices in [convex, simple, holed] {
      for t in indices.chunks(3) {
        let trig = TriangleView::from_indices(&buffer, [t[0], t[1], t[2]]);
        assert!(trig.orientation(&tol).is_cw());
      }
    }
  }
}
