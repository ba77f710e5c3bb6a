use std::{convert::Infallible, marker::PhantomData};

use crate::{ClipOutcome, List, ListBuilder, ListFormat, Polygon, TriangulationError};

/// Decides what a [TriangleListBuilder] stores for each triangle corner
pub trait Corner<'p, P: Polygon<'p>> {
    type Item;

    fn resolve(polygon: &'p P, index: P::Index) -> Self::Item;
}

/// Store the [Polygon::Index] of each corner
#[derive(Debug, Clone, Copy, Default)]
pub struct Indices;

impl<'p, P: Polygon<'p>> Corner<'p, P> for Indices {
    type Item = P::Index;

    #[inline(always)]
    fn resolve(_polygon: &'p P, index: P::Index) -> P::Index {
        index
    }
}

/// Store a clone of the [Polygon::Vertex] of each corner, for meshes without per-vertex attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct Vertices;

impl<'p, P: Polygon<'p>> Corner<'p, P> for Vertices
where P::Vertex: Clone {
    type Item = P::Vertex;

    fn resolve(polygon: &'p P, index: P::Index) -> P::Vertex {
        polygon.get_vertex(index).clone()
    }
}

/// Appends triangles to a [List], storing whatever `C` resolves each corner to.
pub struct TriangleListFormat<'p, P: Polygon<'p>, L: List<C::Item>, C: Corner<'p, P>> {
    list: L,
    _phantom: PhantomData<(&'p P, C)>,
}

/// [TriangleListFormat] storing vertex indices
pub type IndexedListFormat<'p, P, L> = TriangleListFormat<'p, P, L, Indices>;
/// [TriangleListFormat] storing vertex values
pub type DeindexedListFormat<'p, P, L> = TriangleListFormat<'p, P, L, Vertices>;

impl<'p, P: Polygon<'p>, L: List<P::Index>> TriangleListFormat<'p, P, L, Indices> {
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData }
    }
}

impl<'p, P: Polygon<'p>, L: List<P::Vertex>> TriangleListFormat<'p, P, L, Vertices>
where P::Vertex: Clone {
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData }
    }
}

impl<'p, P: Polygon<'p>, L: List<C::Item>, C: Corner<'p, P>> ListFormat<'p, P> for TriangleListFormat<'p, P, L, C> {
    type Builder = TriangleListBuilder<'p, P, L, C>;

    fn initialize(mut self, polygon: &'p P) -> Result<Self::Builder, Infallible> {
        self.list.reserve_triangles(polygon.vertex_count().saturating_sub(2));
        Ok(TriangleListBuilder {
            rollback_to: self.list.triangle_count(),
            list: self.list,
            polygon,
            _corner: PhantomData,
        })
    }
}

/// The [ListBuilder] of a [TriangleListFormat]. Triangles already in the list before triangulation are kept on failure.
pub struct TriangleListBuilder<'p, P: Polygon<'p>, L: List<C::Item>, C: Corner<'p, P>> {
    list: L,
    polygon: &'p P,
    rollback_to: usize,
    _corner: PhantomData<C>,
}

impl<'p, P: Polygon<'p>, L: List<C::Item>, C: Corner<'p, P>> ListBuilder<'p, P> for TriangleListBuilder<'p, P, L, C> {
    type Output = L;
    type Error = Infallible;

    fn add_triangle(&mut self, [a, b, c]: [P::Index; 3]) -> Result<(), Infallible> {
        let polygon = self.polygon;
        self.list.push_triangle([C::resolve(polygon, a), C::resolve(polygon, b), C::resolve(polygon, c)]);
        Ok(())
    }

    fn build(self, outcome: ClipOutcome) -> Result<L, Infallible> {
        if let ClipOutcome::Stalled { remaining } = outcome {
            log::debug!("list holds a partial triangulation, {} vertices were left unclipped", remaining);
        }
        Ok(self.list)
    }

    fn fail(mut self, _error: &TriangulationError<Infallible>) {
        self.list.truncate_triangles(self.rollback_to);
    }
}
