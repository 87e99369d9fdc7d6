use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

use crate::Tolerance;

/// A vertex position. Geometric tests read the first two components (x, y);
/// any further component rides along untouched.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T, const N: usize> Point<T, N> {
  const PLANAR: () = assert!(N >= 2, "points need at least an x and a y component");

  pub const fn new(array: [T; N]) -> Point<T, N> {
    #[allow(clippy::let_unit_value)]
    let () = Self::PLANAR;
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T: Float, const N: usize> Point<T, N> {
  pub fn x(&self) -> T {
    self.array[0]
  }

  pub fn y(&self) -> T {
    self.array[1]
  }

  /// Component-wise comparison within the tolerance, every component included.
  pub fn approx_eq(&self, other: &Point<T, N>, tol: &Tolerance) -> bool {
    self
      .array
      .iter()
      .zip(other.array.iter())
      .all(|(a, b)| tol.approx_eq(*a, *b))
  }

  pub fn midpoint(a: &Self, b: &Self) -> Point<T, N> {
    let two = T::one() + T::one();
    Point {
      array: array_init(|i| (a.array[i] + b.array[i]) / two),
    }
  }

  /// Component-wise mean of three points.
  pub fn centroid(a: &Self, b: &Self, c: &Self) -> Point<T, N> {
    let three = T::one() + T::one() + T::one();
    Point {
      array: array_init(|i| (a.array[i] + b.array[i] + c.array[i]) / three),
    }
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
  fn from(array: [T; N]) -> Point<T, N> {
    Point::new(array)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point::new([point.0, point.1])
  }
}

impl<T> From<(T, T, T)> for Point<T, 3> {
  fn from(point: (T, T, T)) -> Point<T, 3> {
    Point::new([point.0, point.1, point.2])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;

  #[test]
  fn approx_eq_covers_z() {
    let tol = Tolerance::default();
    let p = Point::new([1.0, 2.0, 3.0]);
    assert!(p.approx_eq(&Point::new([1.0 + 1e-9, 2.0, 3.0]), &tol));
    assert!(!p.approx_eq(&Point::new([1.0, 2.0, 3.5]), &tol));
  }

  #[test]
  fn conversions() {
    let p: Point<f32> = (1.0, 2.0).into();
    assert_eq!(p.x(), 1.0);
    assert_eq!(p.y(), 2.0);
    let q: Point<f32, 3> = (1.0, 2.0, 9.0).into();
    assert_eq!(q[2], 9.0);
    assert_eq!(q.cast(f64::from), Point::new([1.0, 2.0, 9.0]));
  }

  #[test]
  fn centroid_averages_every_component() {
    let c = Point::centroid(
      &Point::new([0.0, 0.0, 3.0]),
      &Point::new([3.0, 0.0, 3.0]),
      &Point::new([0.0, 6.0, 0.0]),
    );
    assert_eq!(c, Point::new([1.0, 2.0, 2.0]));
    let m = Point::midpoint(&Point::new([0.0, 4.0]), &Point::new([2.0, -2.0]));
    assert_eq!(m, Point::new([1.0, 1.0]));
  }

  #[test]
  fn sampling() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let p: Point<f64, 3> = rng.gen();
    assert!(p.array.iter().all(|c| (0.0..1.0).contains(c)));
  }
}
