use crate::{ClipOutcome, ListBuilder, ListFormat, Polygon, TriangulationError, Winding};

/// Flips the [Winding] of the wrapped [ListFormat] or [ListBuilder]. Created by [ListFormat::reverse_winding].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<T>(T);

impl<T> Reversed<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self(inner)
    }
}

impl<'p, P: Polygon<'p>, LF: ListFormat<'p, P>> ListFormat<'p, P> for Reversed<LF> {
    type Builder = Reversed<LF::Builder>;

    fn initialize(self, polygon: &'p P) -> Result<Self::Builder, <LF::Builder as ListBuilder<'p, P>>::Error> {
        self.0.initialize(polygon).map(Reversed)
    }
}

impl<'p, P: Polygon<'p>, LB: ListBuilder<'p, P>> ListBuilder<'p, P> for Reversed<LB> {
    type Output = LB::Output;
    type Error = LB::Error;

    const WINDING: Winding = LB::WINDING.reverse();

    fn add_triangle(&mut self, triangle: [P::Index; 3]) -> Result<(), Self::Error> {
        self.0.add_triangle(triangle)
    }

    fn build(self, outcome: ClipOutcome) -> Result<Self::Output, Self::Error> {
        self.0.build(outcome)
    }

    fn fail(self, error: &TriangulationError<Self::Error>) {
        self.0.fail(error)
    }
}
