use core::fmt;
use std::fmt::Debug;

use num_traits::real::Real;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// A plain `(x, y)` point, usable both as a polygon vertex and as a query point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point2D<C = f32> {
    pub x: C,
    pub y: C,
}

impl<C> Point2D<C> {
    pub const fn new(x: C, y: C) -> Self {
        Self { x, y }
    }
}

impl<C: Real> Vertex for Point2D<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.y
    }
}

impl<C> From<(C, C)> for Point2D<C> {
    fn from((x, y): (C, C)) -> Self {
        Self::new(x, y)
    }
}

impl<C> From<[C; 2]> for Point2D<C> {
    fn from([x, y]: [C; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<C: fmt::Display> fmt::Display for Point2D<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Working copy of a vertex position, detached from the caller's vertex type
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct Coords<C: Real>([C; 2]);

impl<C: Real> Coords<C> {
    pub fn new(x: C, y: C) -> Self { Self([x, y]) }

    pub fn of<V: Vertex<Coordinate=C> + ?Sized>(v: &V) -> Self { Self::new(v.x(), v.y()) }

    pub fn x(&self) -> C { self.0[0] }
    pub fn y(&self) -> C { self.0[1] }

    /// Cross product of `(b - self)` and `(c - self)`. Positive when `self -> b -> c` turns counterclockwise.
    #[inline(always)]
    pub fn cross(&self, b: &Self, c: &Self) -> C {
        (b.x() - self.x()) * (c.y() - self.y()) - (b.y() - self.y()) * (c.x() - self.x())
    }
}

impl<C: Real> fmt::Debug for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coords");
        if let Some(x) = self.x().to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y().to_f64() {
            tuple.field(&y);
        }
        tuple.finish()
    }
}

impl<C: Real> fmt::Display for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x().to_f64(), self.y().to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Coords<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl<V: Vertex + ?Sized> Vertex for &V {
    type Coordinate = V::Coordinate;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        (**self).x()
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        (**self).y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign() {
        let a = Coords::new(0f64, 0.);
        let b = Coords::new(1., 0.);
        let c = Coords::new(0., 1.);
        assert!(a.cross(&b, &c) > 0.);
        assert!(a.cross(&c, &b) < 0.);
        assert_eq!(a.cross(&b, &Coords::new(2., 0.)), 0.);
    }
}
