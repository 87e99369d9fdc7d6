use num_traits::Float;

use super::polygon::open_len;
use super::{Point, Polygon, TriangleView};
use crate::algorithms::triangulation::{Incomplete, Triangulator};
use crate::Tolerance;

/// A vertex buffer together with the clockwise triangles indexing it.
///
/// ```rust
/// # use ringtri::data::{Point, Polygon, TriangleMesh};
/// let square = Polygon::new(
///   [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]].map(Point::new).to_vec(),
/// ).unwrap();
/// let mesh = TriangleMesh::from_polygon(&square).unwrap();
/// assert_eq!(mesh.triangle_count(), 2);
/// assert_eq!(mesh.area(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh<T, const N: usize = 2> {
  vertices: Vec<Point<T, N>>,
  indices: Vec<usize>,
}

impl<T, const N: usize> TriangleMesh<T, N>
where
  T: Float,
{
  /// Wrap an existing buffer. Every index must be in bounds.
  pub fn new(vertices: Vec<Point<T, N>>, indices: Vec<usize>) -> TriangleMesh<T, N> {
    debug_assert_eq!(indices.len() % 3, 0);
    debug_assert!(indices.iter().all(|&i| i < vertices.len()));
    TriangleMesh { vertices, indices }
  }

  pub fn from_polygon(polygon: &Polygon<T, N>) -> Result<TriangleMesh<T, N>, Incomplete> {
    Self::from_polygon_with(polygon, &Triangulator::default())
  }

  pub fn from_polygon_with(
    polygon: &Polygon<T, N>,
    triangulator: &Triangulator,
  ) -> Result<TriangleMesh<T, N>, Incomplete> {
    let local: Vec<usize> = (0..polygon.len()).collect();
    let indices = triangulator.simple_polygon(polygon.points(), &local)?;
    Ok(TriangleMesh::new(polygon.points().to_vec(), indices))
  }

  /// Mesh of the region between `outer` and `hole`. The vertex buffer holds
  /// the outer ring followed by the hole, without closing duplicates.
  pub fn from_polygon_with_hole(
    outer: &[Point<T, N>],
    hole: &[Point<T, N>],
  ) -> Result<TriangleMesh<T, N>, Incomplete> {
    let triangulator = Triangulator::default();
    let tol = triangulator.tolerance();
    let outer = &outer[..open_len(outer, tol)];
    let hole = &hole[..open_len(hole, tol)];
    let indices = triangulator.with_hole(outer, hole)?;
    let vertices = outer.iter().chain(hole).copied().collect();
    Ok(TriangleMesh::new(vertices, indices))
  }

  pub fn vertices(&self) -> &[Point<T, N>] {
    &self.vertices
  }

  pub fn indices(&self) -> &[usize] {
    &self.indices
  }

  pub fn into_parts(self) -> (Vec<Point<T, N>>, Vec<usize>) {
    (self.vertices, self.indices)
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn triangles(&self) -> impl Iterator<Item = TriangleView<'_, T, N>> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(move |t| TriangleView::from_indices(&self.vertices, [t[0], t[1], t[2]]))
  }

  /// Total unsigned area of the triangles.
  pub fn area(&self) -> T {
    self
      .triangles()
      .map(|t| t.signed_area().abs())
      .fold(T::zero(), |acc, v| acc + v)
  }

  /// Smallest and largest XY coordinates over the vertices used by a triangle.
  pub fn bounds(&self) -> Option<([T; 2], [T; 2])> {
    let mut iter = self.indices.iter().map(|&i| &self.vertices[i]);
    let first = iter.next()?;
    let init = ([first.x(), first.y()], [first.x(), first.y()]);
    Some(iter.fold(init, |(min, max), pt| {
      (
        [min[0].min(pt.x()), min[1].min(pt.y())],
        [max[0].max(pt.x()), max[1].max(pt.y())],
      )
    }))
  }

  /// Every triangle winds clockwise at the given tolerance.
  pub fn is_clockwise(&self, tol: &Tolerance) -> bool {
    self.triangles().all(|t| t.orientation(tol).is_cw())
  }
}
