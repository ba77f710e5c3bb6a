//! Triangulation and point-in-polygon tests for simple polygons.
//!
//! [triangulate] splits a simple polygon into `n - 2` triangles by ear clipping, reporting each triangle as
//! indices into the original vertex list so per-vertex attributes stay aligned. [contains] is an even-odd
//! hit test. Both accept either winding and never fail on malformed input: too few vertices, degenerate or
//! self-intersecting boundaries yield a partial (possibly empty) triangle list or a best-effort verdict.
//!
//! For control over the output layout (triangle arrays, narrower index types, vertex values instead of
//! indices) use the [Polygon] trait with a [ListFormat] from [formats].
//!
//! ```
//! use simplepoly::{Point2D, contains, triangulate};
//!
//! let square = [Point2D::new(0f32, 0.), Point2D::new(10., 0.), Point2D::new(10., 10.), Point2D::new(0., 10.)];
//! assert_eq!(triangulate(&square).len(), 6);
//! assert!(contains(&square, &Point2D::new(5., 5.)));
//! assert!(!contains(&square, &Point2D::new(15., 5.)));
//! ```

mod math;
mod earclip;
mod containment;
mod options;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, InternalError, IndexOverflow};
pub use earclip::EarClipper;
pub use options::EarClipOptions;

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

/// Triangulate a simple polygon, returning 3 indices into `points` per triangle.
///
/// A polygon of `n` vertices produces `n - 2` triangles. Fewer than 3 vertices produce nothing, and
/// if no ear can be found (degenerate or self-intersecting input) the triangles found so far are returned.
///
/// A complete triangulation lists triangles in the reverse of the order they were clipped, each wound clockwise
/// (y-up), whichever winding `points` has: the whole clipping sequence read backwards. A partial one keeps the
/// clipping order and counterclockwise triangles. Use [Polygon::triangulate] to choose another layout or winding.
pub fn triangulate<V: Vertex>(points: &[V]) -> Vec<usize> {
    let format = formats::IndexedListFormat::new(Vec::new()).reverse_winding();
    match points.triangulate(format) {
        Ok(indices) => indices,
        Err(error) => {
            log::error!("triangulation of {} vertices failed: {}", points.len(), error);
            Vec::new()
        }
    }
}

/// Tests whether `query` lies inside the polygon described by `points`, using the even-odd rule.
///
/// Polygons with fewer than 3 vertices contain nothing. Points exactly on the boundary get a deterministic
/// answer from the half-open crossing rule: an edge is crossed when `query.y` lies in `(min_y, max_y]` of
/// the edge and the crossing is strictly to the right of `query`. For an axis-aligned rectangle this puts the
/// left and top edges inside and the right and bottom edges outside.
pub fn contains<V: Vertex, Q: Vertex<Coordinate=V::Coordinate> + ?Sized>(points: &[V], query: &Q) -> bool {
    points.contains_point(query)
}
