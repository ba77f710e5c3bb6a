use num_traits::real::Real;

/// Tolerances for the ear clipping predicates.
///
/// Both are tuning constants scaled to the coordinate space in use, not behavioral contracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarClipOptions<C> {
    /// Minimum cross product `(v - u) x (w - u)` for `u, v, w` to count as a convex corner.
    /// Zero-area (collinear) corners are always rejected as long as this is positive.
    ///
    /// Defaults to `C::min_positive_value()`, the smallest positive *normal* value rather than the smallest
    /// subnormal, so corners whose cross product is subnormal are not ears either.
    pub convexity_epsilon: C,
    /// Slack for the point-in-ear test. A vertex blocks an ear when all three corner cross products are at least
    /// `-containment_epsilon`.
    pub containment_epsilon: C,
}

impl<C: Real> EarClipOptions<C> {
    pub fn with_convexity_epsilon(self, convexity_epsilon: C) -> Self {
        Self { convexity_epsilon, ..self }
    }

    pub fn with_containment_epsilon(self, containment_epsilon: C) -> Self {
        Self { containment_epsilon, ..self }
    }
}

impl<C: Real> Default for EarClipOptions<C> {
    fn default() -> Self {
        Self {
            convexity_epsilon: C::min_positive_value(),
            containment_epsilon: C::zero(),
        }
    }
}
