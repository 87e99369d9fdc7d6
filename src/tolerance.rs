use num_traits::Float;

/// Default tolerance for every approximate comparison in the crate.
pub const EPSILON: f64 = 1e-7;

/// Absolute tolerance used by the geometric predicates.
///
/// Values closer than `epsilon` compare equal. The default is [`EPSILON`];
/// inputs with very large or very small coordinates may need a different one.
///
/// ```rust
/// # use ringtri::Tolerance;
/// let tol = Tolerance::default();
/// assert!(tol.approx_eq(0.1 + 0.2, 0.3));
/// assert!(!tol.approx_lt(1.0, 1.0 + 1e-9));
/// assert!(Tolerance::new(1e-12).approx_lt(1.0, 1.0 + 1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
  epsilon: f64,
}

impl Default for Tolerance {
  fn default() -> Self {
    Tolerance { epsilon: EPSILON }
  }
}

impl Tolerance {
  pub const fn new(epsilon: f64) -> Tolerance {
    Tolerance { epsilon }
  }

  pub fn epsilon(&self) -> f64 {
    self.epsilon
  }

  /// The tolerance in the scalar type of the input.
  pub fn get<T: Float>(&self) -> T {
    T::from(self.epsilon).unwrap_or_else(T::epsilon)
  }

  pub fn approx_eq<T: Float>(&self, a: T, b: T) -> bool {
    (a - b).abs() < self.get()
  }

  /// `a` is smaller than `b` by more than epsilon.
  pub fn approx_lt<T: Float>(&self, a: T, b: T) -> bool {
    b - a > self.get()
  }

  /// `a` is larger than `b` by more than epsilon.
  pub fn approx_gt<T: Float>(&self, a: T, b: T) -> bool {
    a - b > self.get()
  }

  pub fn is_zero<T: Float>(&self, a: T) -> bool {
    self.approx_eq(a, T::zero())
  }
}
