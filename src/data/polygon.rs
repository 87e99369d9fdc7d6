use claims::debug_assert_ok;
use num_traits::Float;
use rand::Rng;
use std::f64::consts::TAU;

use crate::data::Point;
use crate::{Error, Tolerance};

///////////////////////////////////////////////////////////////////////////////
// Point in polygon

// Does the vertical ray from `origin` towards +Y cross the edge `p1-p2`?
//
// Vertical edges never count. An edge touching the ray with an endpoint only
// counts when that endpoint is its right one, so a ray through a shared vertex
// is counted once.
fn ray_crosses<T, const N: usize>(
  origin: &Point<T, N>,
  p1: &Point<T, N>,
  p2: &Point<T, N>,
  tol: &Tolerance,
) -> bool
where
  T: Float,
{
  if tol.approx_eq(p1.x(), p2.x()) {
    return false;
  }
  let y = if tol.approx_eq(p1.y(), p2.y()) {
    p1.y()
  } else {
    p1.y() + (origin.x() - p1.x()) * (p2.y() - p1.y()) / (p2.x() - p1.x())
  };
  if tol.approx_lt(y, origin.y()) {
    return false;
  }
  let (left, right) = if tol.approx_lt(p1.x(), p2.x()) {
    (p1, p2)
  } else {
    (p2, p1)
  };
  tol.approx_gt(origin.x(), left.x()) && !tol.approx_gt(origin.x(), right.x())
}

/// Even-odd test of `point` against the ring of points yielded by `ring`.
///
/// The ring may be open or closed (last point repeating the first). Points on
/// the boundary may be classified either way.
///
/// ```rust
/// # use ringtri::data::{point_in_polygon, Point};
/// # use ringtri::Tolerance;
/// let tol = Tolerance::default();
/// let square = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]].map(Point::new);
/// assert!(point_in_polygon(&Point::new([0.5, 0.5]), &square, &tol));
/// assert!(!point_in_polygon(&Point::new([1.5, 0.5]), &square, &tol));
/// ```
pub fn point_in_polygon<'a, T, const N: usize, I>(
  point: &Point<T, N>,
  ring: I,
  tol: &Tolerance,
) -> bool
where
  T: Float + 'a,
  I: IntoIterator<Item = &'a Point<T, N>>,
{
  let mut iter = ring.into_iter();
  let first = match iter.next() {
    Some(first) => first,
    None => return false,
  };
  let mut crossings = 0_usize;
  let mut prev = first;
  for pt in iter {
    if ray_crosses(point, prev, pt, tol) {
      crossings += 1;
    }
    prev = pt;
  }
  if !first.approx_eq(prev, tol) && ray_crosses(point, prev, first, tol) {
    crossings += 1;
  }
  crossings % 2 == 1
}

// Length of a ring once a closing duplicate of the first point is dropped.
pub(crate) fn open_len<T, const N: usize>(ring: &[Point<T, N>], tol: &Tolerance) -> usize
where
  T: Float,
{
  match ring {
    [first, .., last] if first.approx_eq(last, tol) => ring.len() - 1,
    _ => ring.len(),
  }
}

// Is ring[excluded] inside the ring formed by every other point?
pub(crate) fn inside_without<T, const N: usize>(
  ring: &[Point<T, N>],
  excluded: usize,
  tol: &Tolerance,
) -> bool
where
  T: Float,
{
  let rest = ring
    .iter()
    .enumerate()
    .filter(|&(i, _)| i != excluded)
    .map(|(_, pt)| pt);
  point_in_polygon(&ring[excluded], rest, tol)
}

pub(crate) fn ring_area_2x<T, const N: usize>(ring: &[Point<T, N>]) -> T
where
  T: Float,
{
  let n = ring.len();
  (0..n)
    .map(|i| {
      let p = &ring[i];
      let q = &ring[(i + 1) % n];
      p.x() * q.y() - q.x() * p.y()
    })
    .fold(T::zero(), |acc, v| acc + v)
}

///////////////////////////////////////////////////////////////////////////////
// Polygon

/// An ordered, clockwise ring of at least three points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T, const N: usize = 2> {
  points: Vec<Point<T, N>>,
}

impl<T: Float, const N: usize> Polygon<T, N> {
  pub fn new_unchecked(points: Vec<Point<T, N>>) -> Polygon<T, N> {
    Polygon { points }
  }

  /// Build a polygon, dropping a closing duplicate of the first point.
  pub fn new(points: Vec<Point<T, N>>) -> Result<Polygon<T, N>, Error> {
    Polygon::new_with(points, &Tolerance::default())
  }

  pub fn new_with(mut points: Vec<Point<T, N>>, tol: &Tolerance) -> Result<Polygon<T, N>, Error> {
    points.truncate(open_len(&points, tol));
    let polygon = Polygon { points };
    polygon.validate()?;
    Ok(polygon)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  pub fn points(&self) -> &[Point<T, N>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T, N>> {
    self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point<T, N> {
    &self.points[idx]
  }

  /// Shoelace sum. Negative for clockwise rings.
  pub fn signed_area_2x(&self) -> T {
    ring_area_2x(&self.points)
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn contains_point(&self, pt: &Point<T, N>, tol: &Tolerance) -> bool {
    point_in_polygon(pt, &self.points, tol)
  }

  /// Positions of the vertices that lie inside the polygon formed without them.
  pub fn reflex_vertices(&self, tol: &Tolerance) -> Vec<usize> {
    (0..self.points.len())
      .filter(|&i| inside_without(&self.points, i, tol))
      .collect()
  }

  pub fn is_convex(&self, tol: &Tolerance) -> bool {
    (0..self.points.len()).all(|i| !inside_without(&self.points, i, tol))
  }
}

impl Polygon<f64> {
  /// Clockwise regular polygon. The first vertex sits at angle `rotation`.
  pub fn regular(n: usize, radius: f64, rotation: f64, center: [f64; 2]) -> Polygon<f64> {
    let n = n.max(3);
    let points = (0..n)
      .map(|i| {
        let angle = rotation - TAU * i as f64 / n as f64;
        Point::new([
          center[0] + radius * angle.cos(),
          center[1] + radius * angle.sin(),
        ])
      })
      .collect();
    let polygon = Polygon { points };
    debug_assert_ok!(polygon.validate());
    polygon
  }

  /// Random clockwise polygon that is star-shaped around the origin.
  ///
  /// Vertex `i` is placed near angle `-i * TAU / n` with a radius in `[1, 10)`.
  /// The angular jitter stays below half a step, so the ring never crosses
  /// itself.
  pub fn random_star<R>(n: usize, rng: &mut R) -> Polygon<f64>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let step = TAU / n as f64;
    let points = (0..n)
      .map(|i| {
        let angle = -(i as f64 + rng.gen_range(-0.4..0.4)) * step;
        let radius = rng.gen_range(1.0..10.0);
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    Polygon { points }
  }
}

///////////////////////////////////////////////////////////////////////////////
// IndexedPolygon

/// Polygon positions paired with the indices they occupy in a larger vertex
/// buffer. Triangulating an indexed polygon emits those external indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPolygon<'a, T, const N: usize = 2> {
  positions: &'a [Point<T, N>],
  indices: &'a [usize],
}

impl<'a, T, const N: usize> IndexedPolygon<'a, T, N> {
  pub fn new(
    positions: &'a [Point<T, N>],
    indices: &'a [usize],
  ) -> Result<IndexedPolygon<'a, T, N>, Error> {
    if positions.len() != indices.len() {
      return Err(Error::MismatchedIndices);
    }
    Ok(IndexedPolygon { positions, indices })
  }

  pub fn positions(&self) -> &'a [Point<T, N>] {
    self.positions
  }

  pub fn indices(&self) -> &'a [usize] {
    self.indices
  }

  pub fn len(&self) -> usize {
    self.positions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }
}
