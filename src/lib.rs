//! Triangulation of simple 2D polygons, with or without a single interior hole.
//!
//! Every entry point takes clockwise vertex rings on the XY plane and returns a
//! flat list of vertex indices, three per triangle, in clockwise winding. The
//! result is meant to be handed to a mesh renderer together with the vertex
//! buffer it indexes.
//!
//! ```rust
//! use ringtri::data::Point;
//! use ringtri::algorithms::triangulation::triangulate_simple_polygon;
//!
//! // An arrow head with one reflex vertex.
//! let arrow = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 2.0]),
//!   Point::new([2.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//! ];
//! let triangles = triangulate_simple_polygon(&arrow, &[0, 1, 2, 3]).unwrap();
//! assert_eq!(triangles, vec![3, 0, 1, 1, 2, 3]);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
mod tolerance;

pub use intersection::{segments_intersect, Intersects, Strictness};
pub use orientation::Orientation;
pub use tolerance::{Tolerance, EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A ring has fewer than three vertices once a closing duplicate is dropped.
  InsufficientVertices,
  /// Positions and external indices differ in length.
  MismatchedIndices,
  /// No vertex of a concave polygon can be split off. The polygon is either
  /// not simple or degenerate at the current tolerance.
  NoDivisibleVertex,
  /// The triangles found between the outer ring and the hole do not cover the
  /// area between them.
  UnresolvedHole,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::MismatchedIndices => write!(f, "Positions and indices differ in length"),
      Error::NoDivisibleVertex => write!(f, "No divisible vertex"),
      Error::UnresolvedHole => write!(
        f,
        "Hole triangulation does not cover the area between the rings"
      ),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
