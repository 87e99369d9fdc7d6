use num_traits::Float;

use crate::data::Point;
use crate::Tolerance;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Cross product `(a - c) x (b - c)` on the XY plane.
  ///
  /// Twice the signed area of the triangle `a, b, c`: positive when the walk
  /// `a -> b -> c` turns counter-clockwise, negative when it turns clockwise.
  ///
  /// ```rust
  /// # use ringtri::data::Point;
  /// # use ringtri::Orientation;
  /// let a = Point::new([0.0, 0.0]);
  /// let b = Point::new([0.0, 5.0]);
  /// let c = Point::new([5.0, 5.0]);
  /// assert_eq!(Orientation::cross(&a, &b, &c), -25.0);
  /// ```
  pub fn cross<T, const N: usize>(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> T
  where
    T: Float,
  {
    (a.x() - c.x()) * (b.y() - c.y()) - (b.x() - c.x()) * (a.y() - c.y())
  }

  /// Determine the direction you have to turn if you walk from `a`
  /// to `b` to `c`. Cross products within epsilon of zero are colinear.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use ringtri::data::Point;
  /// # use ringtri::{Orientation, Tolerance};
  /// let tol = Tolerance::default();
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0]), &tol).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0]), &tol).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0]), &tol).is_cw());
  /// ```
  pub fn new<T, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    tol: &Tolerance,
  ) -> Orientation
  where
    T: Float,
  {
    Orientation::from_cross(Orientation::cross(a, b, c), tol)
  }

  pub fn from_cross<T: Float>(cross: T, tol: &Tolerance) -> Orientation {
    if tol.is_zero(cross) {
      Orientation::CoLinear
    } else if cross > T::zero() {
      Orientation::CounterClockWise
    } else {
      Orientation::ClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }

  // Sign of the product of two cross products.
  pub(crate) fn product(self, other: Orientation) -> std::cmp::Ordering {
    use std::cmp::Ordering::*;
    match (self, other) {
      (Orientation::CoLinear, _) | (_, Orientation::CoLinear) => Equal,
      (a, b) if a == b => Greater,
      _ => Less,
    }
  }
}
