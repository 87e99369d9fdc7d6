use num_traits::Float;
use std::cmp::Ordering;

use crate::data::Point;
use crate::{Orientation, Tolerance};

/// How contact without a proper crossing is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
  /// Touching at an endpoint or overlapping colinearly is not an intersection.
  Lenient,
  /// Any contact is an intersection.
  Strict,
}

impl Strictness {
  pub fn is_strict(self) -> bool {
    matches!(self, Strictness::Strict)
  }
}

pub trait Intersects<T = Self> {
  fn intersects(&self, other: &T, strictness: Strictness, tol: &Tolerance) -> bool;
}

/// Does segment `a-b` cross segment `c-d`?
///
/// Segments whose bounding boxes are disjoint never intersect. Otherwise each
/// segment has to separate the endpoints of the other one. A point that lies
/// exactly on the other segment's line only counts under [`Strictness::Strict`].
///
/// ```rust
/// # use ringtri::data::Point;
/// # use ringtri::{segments_intersect, Strictness, Tolerance};
/// let tol = Tolerance::default();
/// let [a, b, c] = [[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]].map(Point::new);
/// // Sharing only an endpoint.
/// assert!(!segments_intersect(&a, &b, &b, &c, Strictness::Lenient, &tol));
/// assert!(segments_intersect(&a, &b, &b, &c, Strictness::Strict, &tol));
/// ```
pub fn segments_intersect<T, const N: usize>(
  a: &Point<T, N>,
  b: &Point<T, N>,
  c: &Point<T, N>,
  d: &Point<T, N>,
  strictness: Strictness,
  tol: &Tolerance,
) -> bool
where
  T: Float,
{
  if a.x().max(b.x()) < c.x().min(d.x())
    || a.y().max(b.y()) < c.y().min(d.y())
    || c.x().max(d.x()) < a.x().min(b.x())
    || c.y().max(d.y()) < a.y().min(b.y())
  {
    return false;
  }

  let separates = |sign: Ordering| match sign {
    Ordering::Less => false,
    Ordering::Equal => strictness.is_strict(),
    Ordering::Greater => true,
  };

  let ab = Orientation::new(c, b, a, tol).product(Orientation::new(b, d, a, tol));
  if !separates(ab) {
    return false;
  }
  let cd = Orientation::new(a, d, c, tol).product(Orientation::new(d, b, c, tol));
  separates(cd)
}
