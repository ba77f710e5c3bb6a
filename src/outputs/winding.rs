use num_traits::real::Real;

/// The order the vertices of a triangle or polygon are listed in, assuming a y-up coordinate system
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winding {
    Counterclockwise,
    Clockwise,
}

impl Winding {
    /// The opposite winding
    pub const fn reverse(self) -> Self {
        match self {
            Winding::Counterclockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::Counterclockwise,
        }
    }

    /// Classify a shoelace signed area. Only a strictly positive area is counterclockwise.
    pub fn of_signed_area<C: Real>(area: C) -> Self {
        if area > C::zero() {
            Winding::Counterclockwise
        } else {
            Winding::Clockwise
        }
    }
}
