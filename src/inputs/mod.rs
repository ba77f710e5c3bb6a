mod polygon;
pub use polygon::{Polygon, PolygonCoordinate, IndexWith, IndexWithIter};
mod vertex;
pub use vertex::{Vertex, Point2D};
pub(crate) use vertex::Coords;
mod vertex_index;
pub use vertex_index::VertexIndex;
