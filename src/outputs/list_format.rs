use std::error;

use crate::{ClipOutcome, Polygon, TriangulationError, Winding, formats};

/// Entry point of a triangle output: turns into a [ListBuilder] once the polygon is known.
pub trait ListFormat<'p, P: Polygon<'p>>: Sized {
    /// May be `Self` when one type plays both roles.
    type Builder: ListBuilder<'p, P>;

    fn initialize(self, polygon: &'p P) -> Result<Self::Builder, <Self::Builder as ListBuilder<'p, P>>::Error>;

    /// The same format, receiving triangles in the opposite [Winding]
    fn reverse_winding(self) -> formats::Reversed<Self> {
        formats::Reversed::new(self)
    }
}

/// Receives the triangles of one triangulation.
///
/// After a complete clip, triangles arrive in the reverse of their clipping order, wound as [ListBuilder::WINDING]
/// asks. After a stall, the partial triangles arrive in clipping order with the opposite winding, so the flat
/// index sequence is the reversal of what a complete clip would have produced for them.
pub trait ListBuilder<'p, P: Polygon<'p>> {
    type Output;
    type Error: error::Error;

    const WINDING: Winding = Winding::Counterclockwise;

    fn add_triangle(&mut self, triangle: [P::Index; 3]) -> Result<(), Self::Error>;

    /// Finish the output. `outcome` tells whether the triangles cover the whole polygon.
    fn build(self, outcome: ClipOutcome) -> Result<Self::Output, Self::Error>;

    /// Called instead of [ListBuilder::build] when [ListBuilder::add_triangle] fails, to undo partial output.
    fn fail(self, error: &TriangulationError<Self::Error>);
}
