/// How far ear clipping got before the triangles were handed to a [ListBuilder](crate::ListBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipOutcome {
    /// Every ear was clipped; a polygon of `n` vertices produced `n - 2` triangles.
    Complete,
    /// No ear was found among the `remaining` active vertices, so the triangulation is partial.
    /// Typical of collinear, self-intersecting or NaN-tainted input.
    Stalled { remaining: usize },
}

impl ClipOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, ClipOutcome::Complete)
    }
}
