use std::{convert::{TryFrom, TryInto}, marker::PhantomData, ops};

use smallvec::SmallVec;

use crate::{EarClipOptions, EarClipper, IndexOverflow, ListBuilder, ListFormat, TriangulationError, VertexIndex, Winding, containment, math};

use super::vertex::{Coords, Vertex};

/// The [Vertex::Coordinate] type of a [Polygon]
pub type PolygonCoordinate<'p, P> = <<P as Polygon<'p>>::Vertex as Vertex>::Coordinate;

/// An indexable simple polygon.
///
/// The boundary is implicitly closed: the last vertex connects back to the first.
pub trait Polygon<'p>: 'p + Sized {
    /// The type of vertices of the polygon
    type Vertex: Vertex + 'p;
    /// A type used to uniquely identify a [Vertex] (e.g. [usize] for a [Vec<\[f32; 2\]>](Vec))
    type Index: VertexIndex + 'p;
    /// The [Iterator] type that [Polygon::iter_indices] returns
    type Iter<'i>: Iterator<Item=Self::Index>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    /// Provides the number of vertices of the polygon.
    fn vertex_count(&self) -> usize;

    /// Iterate through all [Polygon::Index]es of the polygon.
    ///
    /// Indices must be returned in either clockwise or counter-clockwise order,
    /// without repeating the initial index, and exactly [Polygon::vertex_count] of them.
    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    /// Get the [Polygon::Vertex] uniquely identified by the [Polygon::Index] value
    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex;

    /// Create a [Polygon] with the [usize] index type substituted with `New` (e.g. [u16] or [u32] for GPU index buffers).
    ///
    /// Fails if the polygon has more vertices than `New` can address.
    fn index_with<New>(self) -> Result<IndexWith<'p, Self, New>, IndexOverflow>
    where Self: Polygon<'p, Index=usize>,
          New: VertexIndex + TryFrom<usize> + TryInto<usize> + 'p {
        IndexWith::new(self)
    }

    /// Triangulate the polygon into the layout specified by `format`, using the default [EarClipOptions]
    fn triangulate<LF: ListFormat<'p, Self>>(&'p self, format: LF) -> Result<<LF::Builder as ListBuilder<'p, Self>>::Output, TriangulationError<<LF::Builder as ListBuilder<'p, Self>>::Error>> {
        EarClipper::<PolygonCoordinate<'p, Self>>::new().triangulate(self, format)
    }

    /// Triangulate the polygon into the layout specified by `format`, using explicit tolerances
    fn triangulate_with<LF: ListFormat<'p, Self>>(&'p self, format: LF, options: &EarClipOptions<PolygonCoordinate<'p, Self>>) -> Result<<LF::Builder as ListBuilder<'p, Self>>::Output, TriangulationError<<LF::Builder as ListBuilder<'p, Self>>::Error>> {
        EarClipper::with_options(*options).triangulate(self, format)
    }

    /// Even-odd membership test of `query` against this polygon.
    ///
    /// Polygons with fewer than 3 vertices contain nothing. See [crate::contains] for the on-boundary rule.
    fn contains_point<Q>(&self, query: &Q) -> bool
    where Q: Vertex<Coordinate=PolygonCoordinate<'p, Self>> + ?Sized {
        containment::contains(self, query)
    }

    /// The shoelace signed area. Positive for counterclockwise polygons.
    fn signed_area(&self) -> PolygonCoordinate<'p, Self> {
        let coords: SmallVec<[Coords<_>; 16]> = self.iter_indices().map(|i| Coords::of(self.get_vertex(i))).collect();
        math::signed_area(&coords)
    }

    /// The orientation of the boundary. Zero-area polygons report [Winding::Clockwise].
    fn winding(&self) -> Winding {
        Winding::of_signed_area(self.signed_area())
    }
}

impl<'p, V: 'p + Vertex, T: 'p + ops::Deref<Target=[V]>> Polygon<'p> for T {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = ops::Range<usize>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    fn vertex_count(&self) -> usize {
        (**self).len()
    }

    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i {
        0..self.vertex_count()
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        &(**self)[index]
    }
}

fn conversion_panic<T, U>(_: T) -> U {
    panic!("Conversion of index failed")
}

/// [Iterator] for the [IndexWith] wrapper
pub struct IndexWithIter<Iter, New> {
    iter: Iter,
    _phantom: PhantomData<New>,
}

impl<Iter: Iterator<Item=usize>, New: TryFrom<usize>> Iterator for IndexWithIter<Iter, New> {
    type Item = New;

    fn next(&mut self) -> Option<Self::Item> {
        // Unrepresentable indices are skipped; the resulting short count is reported as an internal error
        self.iter.by_ref().find_map(|i| New::try_from(i).ok())
    }
}

/// Wrapper to change the [Polygon::Index] type. Created by [Polygon::index_with].
#[derive(Debug, Clone, Copy)]
pub struct IndexWith<'p, P: Polygon<'p, Index=usize>, New>(P, PhantomData<&'p New>);

impl<'p, P: Polygon<'p, Index=usize>, New: TryFrom<usize> + 'p> IndexWith<'p, P, New> {
    fn new(polygon: P) -> Result<Self, IndexOverflow> {
        let vertex_count = polygon.vertex_count();
        if vertex_count > 0 && New::try_from(vertex_count - 1).is_err() {
            return Err(IndexOverflow::new::<New>(vertex_count));
        }
        Ok(Self(polygon, PhantomData))
    }

    /// Unwrap the original polygon
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<'p, P: Polygon<'p, Index=usize>, New: VertexIndex + TryFrom<usize> + TryInto<usize> + 'p> Polygon<'p> for IndexWith<'p, P, New> {
    type Vertex = P::Vertex;
    type Index = New;
    type Iter<'i> = IndexWithIter<P::Iter<'i>, New>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i {
        IndexWithIter { iter: self.0.iter_indices(), _phantom: PhantomData }
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        self.0.get_vertex(index.try_into().unwrap_or_else(conversion_panic))
    }
}
