use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{ClipOutcome, Coords, EarClipOptions, ListBuilder, ListFormat, Polygon, TriangulationError, Vertex, Winding, math};

/// Ear clipping triangulator.
///
/// Holds the working buffers of a triangulation so that they can be reused across calls. A single
/// [EarClipper] can triangulate polygons of any size, one at a time; use one per thread for concurrent work.
///
/// Finding each ear scans the active vertices, so the worst case is O(n³) for n vertices, and O(n²) for
/// polygons where ears are found quickly (e.g. convex polygons).
#[derive(Debug, Clone)]
pub struct EarClipper<C: Real> {
    options: EarClipOptions<C>,
    coords: Vec<Coords<C>>,
    active: Vec<usize>,
    ears: Vec<[usize; 3]>,
}

impl<C: Real> Default for EarClipper<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Real> EarClipper<C> {
    pub fn new() -> Self {
        Self::with_options(EarClipOptions::default())
    }

    pub fn with_options(options: EarClipOptions<C>) -> Self {
        Self {
            options,
            coords: Vec::new(),
            active: Vec::new(),
            ears: Vec::new(),
        }
    }

    pub fn options(&self) -> &EarClipOptions<C> {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EarClipOptions<C> {
        &mut self.options
    }

    /// Triangulate `polygon` into the layout specified by `format`.
    ///
    /// Polygons with fewer than 3 vertices produce no triangles. If clipping stalls (degenerate or
    /// self-intersecting input), the triangles found so far are still delivered to `format`, and
    /// [ListBuilder::build] is told so through [ClipOutcome::Stalled]. See [ListBuilder] for the delivery order.
    pub fn triangulate<'p, P, LF>(&mut self, polygon: &'p P, format: LF) -> Result<<LF::Builder as ListBuilder<'p, P>>::Output, TriangulationError<<LF::Builder as ListBuilder<'p, P>>::Error>>
    where P: Polygon<'p>,
          P::Vertex: Vertex<Coordinate=C>,
          LF: ListFormat<'p, P> {
        let indices: SmallVec<[P::Index; 16]> = polygon.iter_indices().collect();
        if indices.len() != polygon.vertex_count() {
            return Err(TriangulationError::internal(format!("Polygon yielded {} indices but reports {} vertices", indices.len(), polygon.vertex_count())));
        }

        self.coords.clear();
        self.coords.extend(indices.iter().map(|index| Coords::of(polygon.get_vertex(index.clone()))));

        let outcome = self.clip();
        match outcome {
            ClipOutcome::Complete => log::trace!("clipped {} ears from {} vertices", self.ears.len(), self.coords.len()),
            ClipOutcome::Stalled { remaining } => log::debug!("no ear found among {} remaining vertices, stopping after {} of {} triangles", remaining, self.ears.len(), self.coords.len().saturating_sub(2)),
        }

        #[cfg(feature = "debugging")]
        crate::debug::svg::output_triangulation(&self.coords, &self.ears).map_err(TriangulationError::SvgOutput)?;

        // A partial list keeps its clipping order, the whole list read backwards
        let complete = outcome.is_complete();
        let winding = if complete {
            <LF::Builder as ListBuilder<'p, P>>::WINDING
        } else {
            <LF::Builder as ListBuilder<'p, P>>::WINDING.reverse()
        };

        let mut builder = format.initialize(polygon)?;
        let ear_count = self.ears.len();
        for k in 0..ear_count {
            let [u, v, w] = self.ears[if complete { ear_count - 1 - k } else { k }];
            let corners = match winding {
                Winding::Counterclockwise => [u, v, w],
                Winding::Clockwise => [w, v, u],
            };
            if let Err(error) = builder.add_triangle(corners.map(|position| indices[position].clone())) {
                let error = TriangulationError::ListBuilder(error);
                builder.fail(&error);
                return Err(error);
            }
        }
        Ok(builder.build(outcome)?)
    }

    // Fills `ears` with counterclockwise position triples into `coords`, in clipping order
    fn clip(&mut self) -> ClipOutcome {
        self.ears.clear();
        self.active.clear();

        let n = self.coords.len();
        if n < 3 {
            return ClipOutcome::Complete;
        }

        if math::signed_area_2x(&self.coords) > C::zero() {
            self.active.extend(0..n);
        } else {
            self.active.extend((0..n).rev());
        }

        let mut attempts_left = 2 * n;
        let mut v = n - 1;
        while self.active.len() > 2 {
            if attempts_left == 0 {
                return ClipOutcome::Stalled { remaining: self.active.len() };
            }
            attempts_left -= 1;

            let count = self.active.len();
            let u = if v < count { v } else { 0 };
            v = if u + 1 < count { u + 1 } else { 0 };
            let w = if v + 1 < count { v + 1 } else { 0 };

            if self.is_ear(u, v, w) {
                self.ears.push([self.active[u], self.active[v], self.active[w]]);
                self.active.remove(v);
                attempts_left = 2 * self.active.len();
            }
        }

        ClipOutcome::Complete
    }

    // `u`, `v` and `w` are positions in `active`
    fn is_ear(&self, u: usize, v: usize, w: usize) -> bool {
        let a = &self.coords[self.active[u]];
        let b = &self.coords[self.active[v]];
        let c = &self.coords[self.active[w]];

        if !math::is_convex(a, b, c, self.options.convexity_epsilon) {
            return false;
        }

        let epsilon = self.options.containment_epsilon;
        !self.active.iter()
            .enumerate()
            .filter(|&(p, _)| p != u && p != v && p != w)
            .any(|(_, &vp)| math::in_triangle(a, b, c, &self.coords[vp], epsilon))
    }
}
