mod line_segment;
mod mesh;
pub(crate) mod point;
pub mod polygon;
mod triangle;

pub use line_segment::*;
pub use mesh::TriangleMesh;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::{point_in_polygon, IndexedPolygon, Polygon};
pub use point::Point;
