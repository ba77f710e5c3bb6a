/// A type which can be used to index a specific [Vertex](crate::Vertex) of a [Polygon](crate::Polygon).
/// Automatically implemented for all [Eq] + [Clone] + [Debug](std::fmt::Debug) types
pub trait VertexIndex: Eq + Clone + std::fmt::Debug { }

impl<T> VertexIndex for T
where T: Eq + Clone + std::fmt::Debug
{ }
