use num_traits::real::Real;

use crate::Coords;

/// Twice the shoelace signed area, wrapping from the last vertex to the first.
pub(crate) fn signed_area_2x<C: Real>(coords: &[Coords<C>]) -> C {
    let mut area = C::zero();
    if let Some(last) = coords.last() {
        let mut p = last;
        for q in coords {
            area = area + (p.x() * q.y() - q.x() * p.y());
            p = q;
        }
    }
    area
}

pub(crate) fn signed_area<C: Real>(coords: &[Coords<C>]) -> C {
    let two = C::one() + C::one();
    signed_area_2x(coords) / two
}

/// `a -> b -> c` turns counterclockwise by at least `epsilon`. NaN coordinates never qualify.
pub(crate) fn is_convex<C: Real>(a: &Coords<C>, b: &Coords<C>, c: &Coords<C>, epsilon: C) -> bool {
    a.cross(b, c) >= epsilon
}

/// Inclusive test of `p` against the counterclockwise triangle `a, b, c`: every corner cross product must be
/// at least `-epsilon`, so points on an edge or corner count as inside.
pub(crate) fn in_triangle<C: Real>(a: &Coords<C>, b: &Coords<C>, c: &Coords<C>, p: &Coords<C>, epsilon: C) -> bool {
    let floor = -epsilon;
    b.cross(c, p) >= floor && c.cross(a, p) >= floor && a.cross(b, p) >= floor
}
