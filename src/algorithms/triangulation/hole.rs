//! Triangulation of the region between an outer ring and a single hole.
//!
//! Vertices are numbered in one shared buffer: the outer ring occupies
//! `0..m` and the hole `m..m + k`. The algorithm builds a directed graph
//! whose edges are the outer boundary, the hole boundary and every *bridge*
//! that can be drawn without crossing an edge already accepted:
//!
//! 1. Bridges from each outer vertex to each hole vertex, in ring order.
//! 2. Bridges between two non-adjacent hole vertices, starting from a concave
//!    hole vertex. These cut across the hole's pockets.
//!
//! Every bridge is tested against the outer ring as well, and a bridge from the
//! outer ring must run inside it, so concave outer rings are not left.
//!
//! Triangles are the directed 3-cycles `a -> b -> c` closed by an edge
//! `a -> c`. Cycles that are not faces of the bridge graph are filtered out:
//! a face winds clockwise, contains no other vertex and lies between the two
//! rings. Finally the covered area is checked against the area between the
//! rings, in `f64` whatever the input scalar.
use num_traits::Float;
use std::collections::BTreeSet;

use super::Incomplete;
use crate::data::polygon::{inside_without, open_len, point_in_polygon, ring_area_2x};
use crate::data::{IndexedSegment, Point, TriangleView};
use crate::{Error, Intersects, Strictness, Tolerance};

///////////////////////////////////////////////////////////////////////////////
// Adjacency

// Outgoing edges per vertex, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AdjacencyMap {
  targets: Vec<Vec<usize>>,
}

impl AdjacencyMap {
  fn new(len: usize) -> AdjacencyMap {
    AdjacencyMap {
      targets: vec![Vec::new(); len],
    }
  }

  fn link(&mut self, from: usize, to: usize) {
    self.targets[from].push(to);
  }

  fn targets(&self, from: usize) -> &[usize] {
    &self.targets[from]
  }

  fn contains(&self, from: usize, to: usize) -> bool {
    self.targets[from].contains(&to)
  }

  fn len(&self) -> usize {
    self.targets.len()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Bridges

struct Bridges<'a, T, const N: usize> {
  points: &'a [Point<T, N>],
  outer_len: usize,
  hole_len: usize,
  concave: Vec<bool>,
  boundary: Vec<IndexedSegment<'a, T, N>>,
  accepted: Vec<IndexedSegment<'a, T, N>>,
  tol: &'a Tolerance,
}

impl<'a, T, const N: usize> Bridges<'a, T, N>
where
  T: Float,
{
  fn new(
    points: &'a [Point<T, N>],
    outer_len: usize,
    hole_len: usize,
    tol: &'a Tolerance,
  ) -> Self {
    let hole = &points[outer_len..];
    let concave = (0..hole_len)
      .map(|h| inside_without(hole, h, tol))
      .collect();
    let accepted = (0..hole_len)
      .map(|h| {
        IndexedSegment::new(
          points,
          outer_len + h,
          outer_len + (h + 1) % hole_len,
        )
      })
      .collect();
    let boundary = (0..outer_len)
      .map(|i| IndexedSegment::new(points, i, (i + 1) % outer_len))
      .collect();
    Bridges {
      points,
      outer_len,
      hole_len,
      concave,
      boundary,
      accepted,
      tol,
    }
  }

  fn hole_pred(&self, hole_idx: usize) -> usize {
    self.outer_len + (hole_idx + self.hole_len - 1) % self.hole_len
  }

  // Bridge from outer vertex `from` to hole vertex `outer_len + to`. Its
  // midpoint has to lie inside the outer ring.
  fn try_outer_bridge(&mut self, from: usize, to: usize) -> bool {
    let outer = &self.points[..self.outer_len];
    let mid = Point::midpoint(&self.points[from], &self.points[self.outer_len + to]);
    point_in_polygon(&mid, outer, self.tol) && self.try_bridge(from, to)
  }

  // Accept the bridge `from -> outer_len + to` unless it crosses an accepted
  // segment. Touching counts as crossing, except at a shared endpoint or,
  // for a concave target, at the end of the edge leading into it.
  fn try_bridge(&mut self, from: usize, to: usize) -> bool {
    let candidate = IndexedSegment::new(self.points, from, self.outer_len + to);
    let pred = self.hole_pred(to);
    let concave = self.concave[to];
    let blocked = self.boundary.iter().chain(&self.accepted).any(|seg| {
      let strictness = if candidate.shares_endpoint(seg) || (concave && seg.end == pred) {
        Strictness::Lenient
      } else {
        Strictness::Strict
      };
      candidate.intersects(seg, strictness, self.tol)
    });
    if !blocked {
      self.accepted.push(candidate);
    }
    !blocked
  }
}

fn build_graph<T, const N: usize>(
  points: &[Point<T, N>],
  outer_len: usize,
  hole_len: usize,
  tol: &Tolerance,
) -> AdjacencyMap
where
  T: Float,
{
  let mut bridges = Bridges::new(points, outer_len, hole_len, tol);
  let mut adj = AdjacencyMap::new(outer_len + hole_len);

  for o in 0..outer_len {
    adj.link(o, (o + 1) % outer_len);
  }
  for o in 0..outer_len {
    for h in 0..hole_len {
      if bridges.try_outer_bridge(o, h) {
        log::trace!("bridge {} -> {}", o, outer_len + h);
        adj.link(o, outer_len + h);
      }
    }
  }

  for h in 0..hole_len {
    adj.link(outer_len + h, outer_len + (h + 1) % hole_len);
  }
  for h in 0..hole_len {
    if !bridges.concave[h] {
      continue;
    }
    let prev = (h + hole_len - 1) % hole_len;
    let next = (h + 1) % hole_len;
    for h2 in 0..hole_len {
      if h2 == h || h2 == prev || h2 == next {
        continue;
      }
      if bridges.try_bridge(outer_len + h, h2) {
        log::trace!("hole bridge {} -> {}", outer_len + h, outer_len + h2);
        adj.link(outer_len + h, outer_len + h2);
      }
    }
  }
  adj
}

///////////////////////////////////////////////////////////////////////////////
// Faces

fn is_face<T, const N: usize>(
  points: &[Point<T, N>],
  outer_len: usize,
  tri: [usize; 3],
  tol: &Tolerance,
) -> bool
where
  T: Float,
{
  let trig = TriangleView::from_indices(points, tri);
  if !trig.orientation(tol).is_cw() {
    return false;
  }
  let empty = (0..points.len())
    .filter(|j| !tri.contains(j))
    .all(|j| !trig.contains(&points[j], tol));
  let (outer, hole) = points.split_at(outer_len);
  let centroid = trig.centroid();
  empty && point_in_polygon(&centroid, outer, tol) && !point_in_polygon(&centroid, hole, tol)
}

fn extract_faces<T, const N: usize>(
  points: &[Point<T, N>],
  outer_len: usize,
  adj: &AdjacencyMap,
  tol: &Tolerance,
) -> Vec<usize>
where
  T: Float,
{
  let mut seen = BTreeSet::new();
  let mut out = Vec::new();
  for a in 0..adj.len() {
    for &b in adj.targets(a) {
      for &c in adj.targets(b) {
        if !adj.contains(a, c) {
          continue;
        }
        // Cycles through two hole vertices run against the hole ring.
        let tri = if b >= outer_len && c >= outer_len {
          [c, b, a]
        } else {
          [a, b, c]
        };
        if !is_face(points, outer_len, tri, tol) {
          log::trace!("rejected cycle {:?}", tri);
          continue;
        }
        let mut key = tri;
        key.sort_unstable();
        if seen.insert(key) {
          out.extend(tri);
        }
      }
    }
  }
  out
}

///////////////////////////////////////////////////////////////////////////////
// Entry point

/// Triangulate the area between the clockwise ring `outer` and the clockwise
/// ring `hole`, which must lie strictly inside it.
///
/// Outer vertices keep their ring positions `0..m`; hole vertex `i` becomes
/// `m + i`. Both `m` and the hole length are counted without closing
/// duplicates. If the triangles found do not cover the region, they are
/// returned inside an [`Error::UnresolvedHole`] failure.
pub fn triangulate<T, const N: usize>(
  outer: &[Point<T, N>],
  hole: &[Point<T, N>],
  tol: &Tolerance,
) -> Result<Vec<usize>, Incomplete>
where
  T: Float,
{
  let outer_len = open_len(outer, tol);
  let hole_len = open_len(hole, tol);
  if outer_len < 3 || hole_len < 3 {
    log::debug!(
      "hole: {} outer and {} hole vertices after closing duplicates",
      outer_len,
      hole_len
    );
    return Err(Error::InsufficientVertices.into());
  }
  let outer = &outer[..outer_len];
  let hole = &hole[..hole_len];
  let points: Vec<Point<T, N>> = outer.iter().chain(hole).copied().collect();

  let adj = build_graph(&points, outer_len, hole_len, tol);
  let out = extract_faces(&points, outer_len, &adj, tol);

  let wide: Vec<Point<f64, N>> = points
    .iter()
    .map(|pt| pt.cast(|v| v.to_f64().unwrap_or(f64::NAN)))
    .collect();
  let covered: f64 = out
    .chunks(3)
    .map(|t| -TriangleView::from_indices(&wide, [t[0], t[1], t[2]]).signed_area_2x())
    .sum();
  let (wide_outer, wide_hole) = wide.split_at(outer_len);
  let expected = ring_area_2x(wide_outer).abs() - ring_area_2x(wide_hole).abs();
  let complete = if expected == 0.0 {
    covered == 0.0
  } else {
    tol.approx_eq(covered / expected, 1.0)
  };
  if !complete {
    log::debug!(
      "hole: {} triangles cover {} of {}",
      out.len() / 3,
      covered,
      expected
    );
    return Err(Incomplete::new(Error::UnresolvedHole, out));
  }
  Ok(out)
}
