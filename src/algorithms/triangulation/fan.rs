use num_traits::Float;

use super::Incomplete;
use crate::data::{polygon::open_len, Point};
use crate::{Error, Tolerance};

// Emit a fan from the first of `len` vertices. `index` maps a ring position to
// the index written to the output.
pub(crate) fn fan_into<F>(len: usize, index: F, out: &mut Vec<usize>)
where
  F: Fn(usize) -> usize,
{
  for i in 0..len.saturating_sub(2) {
    out.extend([index(0), index(i + 1), index(i + 2)]);
  }
}

/// Fan triangulation of a convex ring.
///
/// Produces `(0, i + 1, i + 2)` for every `i`, mapped through `indices`.
/// Convexity is not checked; a concave ring yields overlapping triangles.
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
    log::debug!("fan: {} vertices after closing duplicate", len);
    return Err(Error::InsufficientVertices.into());
  }
  let mut out = Vec::with_capacity(3 * (len - 2));
  fan_into(len, |i| indices[i], &mut out);
  Ok(out)
}
