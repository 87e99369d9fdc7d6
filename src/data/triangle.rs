use num_traits::Float;

use super::polygon::point_in_polygon;
use super::Point;
use crate::{Orientation, Tolerance};

/// Three borrowed vertices, in emission order.
pub struct TriangleView<'a, T, const N: usize = 2>([&'a Point<T, N>; 3]);

impl<'a, T, const N: usize> TriangleView<'a, T, N>
where
  T: Float,
{
  pub fn new(pts: [&'a Point<T, N>; 3]) -> TriangleView<'a, T, N> {
    TriangleView(pts)
  }

  /// Look up the corners of an index triple in a vertex buffer.
  pub fn from_indices(points: &'a [Point<T, N>], [a, b, c]: [usize; 3]) -> TriangleView<'a, T, N> {
    TriangleView([&points[a], &points[b], &points[c]])
  }

  pub fn points(&self) -> [&'a Point<T, N>; 3] {
    self.0
  }

  pub fn orientation(&self, tol: &Tolerance) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c, tol)
  }

  /// Twice the signed area, negative for clockwise triangles.
  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    (b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn centroid(&self) -> Point<T, N> {
    let [a, b, c] = self.0;
    Point::centroid(a, b, c)
  }

  /// Ray-cast containment, with the same boundary ambiguity as
  /// [`point_in_polygon`].
  pub fn contains(&self, pt: &Point<T, N>, tol: &Tolerance) -> bool {
    point_in_polygon(pt, self.0, tol)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn area_and_orientation() {
    let tol = Tolerance::default();
    let pts = [[0., 0.], [0., 5.], [5., 5.], [5., 0.]].map(Point::new);
    let cw = TriangleView::from_indices(&pts, [0, 1, 2]);
    assert_eq!(cw.signed_area(), -12.5);
    assert!(cw.orientation(&tol).is_cw());
    let ccw = TriangleView::from_indices(&pts, [2, 1, 0]);
    assert_eq!(ccw.signed_area_2x(), 25.0);
    assert!(ccw.orientation(&tol).is_ccw());
  }

  #[test]
  fn containment() {
    let tol = Tolerance::default();
    let pts = [[0., 0.], [0., 4.], [4., 0.]].map(Point::new);
    let trig = TriangleView::from_indices(&pts, [0, 1, 2]);
    assert!(trig.contains(&Point::new([1., 1.]), &tol));
    assert!(!trig.contains(&Point::new([3., 3.]), &tol));
    assert!(!trig.contains(&Point::new([-1., 1.]), &tol));
    assert!(trig.contains(&trig.centroid(), &tol));
  }
}
