use num_traits::Float;

use super::Point;
use crate::{segments_intersect, Intersects, Strictness, Tolerance};

/// A segment between two vertices of a shared buffer, remembering both the
/// buffer indices and the resolved positions.
#[derive(Debug, PartialEq)]
pub struct IndexedSegment<'a, T, const N: usize = 2> {
  pub start: usize,
  pub end: usize,
  pub start_pos: &'a Point<T, N>,
  pub end_pos: &'a Point<T, N>,
}

impl<'a, T, const N: usize> Clone for IndexedSegment<'a, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}
impl<'a, T, const N: usize> Copy for IndexedSegment<'a, T, N> {}

impl<'a, T, const N: usize> IndexedSegment<'a, T, N> {
  pub fn new(points: &'a [Point<T, N>], start: usize, end: usize) -> IndexedSegment<'a, T, N> {
    IndexedSegment {
      start,
      end,
      start_pos: &points[start],
      end_pos: &points[end],
    }
  }

  pub fn has_endpoint(&self, idx: usize) -> bool {
    self.start == idx || self.end == idx
  }

  pub fn shares_endpoint(&self, other: &IndexedSegment<'_, T, N>) -> bool {
    self.has_endpoint(other.start) || self.has_endpoint(other.end)
  }
}

impl<'a, 'b, T, const N: usize> Intersects<IndexedSegment<'b, T, N>> for IndexedSegment<'a, T, N>
where
  T: Float,
{
  fn intersects(
    &self,
    other: &IndexedSegment<'b, T, N>,
    strictness: Strictness,
    tol: &Tolerance,
  ) -> bool {
    segments_intersect(
      self.start_pos,
      self.end_pos,
      other.start_pos,
      other.end_pos,
      strictness,
      tol,
    )
  }
}
