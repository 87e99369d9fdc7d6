pub mod triangulation;

#[doc(inline)]
pub use triangulation::{
  triangulate_convex, triangulate_simple_polygon, triangulate_with_hole, Incomplete, Triangulate,
  Triangulator,
};
