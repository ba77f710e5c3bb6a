use std::fmt;

use crate::inputs::Vertex;

/// `f32` test vertex that is neither an array nor a tuple, so the generic [Vertex] path is exercised
#[derive(Default, Clone, Copy, PartialEq)]
pub struct VTest([f32; 2]);

impl VTest {
    pub fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }
}

impl fmt::Debug for VTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = self.0;
        write!(f, "<{}, {}>", x, y)
    }
}

impl Vertex for VTest {
    type Coordinate = f32;

    fn x(&self) -> f32 { self.0[0] }
    fn y(&self) -> f32 { self.0[1] }
}

impl From<(f32, f32)> for VTest {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
