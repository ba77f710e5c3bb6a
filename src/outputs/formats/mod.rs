//! Ready-made [ListFormat](crate::ListFormat)s

mod triangle_list;
pub use triangle_list::{TriangleListFormat, TriangleListBuilder, IndexedListFormat, DeindexedListFormat, Corner, Indices, Vertices};
mod reversed;
pub use reversed::Reversed;
