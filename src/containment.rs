use crate::{Coords, Polygon, PolygonCoordinate, Vertex};

use num_traits::real::Real;

/// Horizontal ray crossing number, even-odd rule.
pub(crate) fn contains<'p, P, Q>(polygon: &P, query: &Q) -> bool
where P: Polygon<'p>,
      Q: Vertex<Coordinate=PolygonCoordinate<'p, P>> + ?Sized {
    if polygon.vertex_count() < 3 {
        return false;
    }

    let q = Coords::of(query);
    let mut indices = polygon.iter_indices();
    let first = match indices.next() {
        Some(index) => Coords::of(polygon.get_vertex(index)),
        None => return false,
    };

    let mut inside = false;
    let mut previous = first;
    for index in indices {
        let current = Coords::of(polygon.get_vertex(index));
        if crosses(&current, &previous, &q) {
            inside = !inside;
        }
        previous = current;
    }
    // Closing edge, last vertex back to the first
    if crosses(&first, &previous, &q) {
        inside = !inside;
    }

    log::trace!("{} is {} the polygon", q, if inside { "inside" } else { "outside" });
    inside
}

// The half-open y interval means a ray through a shared vertex is counted once, by exactly one of its edges
fn crosses<C: Real>(vi: &Coords<C>, vj: &Coords<C>, q: &Coords<C>) -> bool {
    let straddles = (vi.y() < q.y() && q.y() <= vj.y()) || (vj.y() < q.y() && q.y() <= vi.y());
    straddles && vi.x() + (q.y() - vi.y()) / (vj.y() - vi.y()) * (vj.x() - vi.x()) > q.x()
}
