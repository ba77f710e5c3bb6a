use std::{error, fmt};

use backtrace::Backtrace;

/// A [Polygon](crate::Polygon) implementation broke its contract, or an ear clipping bug was encountered.
#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during triangulation.
///
/// Malformed polygons (too few vertices, degenerate or self-intersecting boundaries) are not errors;
/// they produce a partial or empty triangle list instead.
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError<LBError: error::Error> {
    /// A [Polygon](crate::Polygon) precondition was violated, or an ear clipping bug was encountered.
    InternalError(InternalError),
    /// The [ListBuilder](crate::ListBuilder) returned an error.
    ListBuilder(LBError),
    #[cfg(feature = "debugging")]
    SvgOutput(std::io::Error),
}

impl<LBError: error::Error> TriangulationError<LBError> {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl<LBError: error::Error> From<LBError> for TriangulationError<LBError> {
    fn from(e: LBError) -> Self {
        Self::ListBuilder(e)
    }
}

impl<LBError: error::Error> fmt::Display for TriangulationError<LBError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InternalError(error) => fmt::Display::fmt(error, f),
            Self::ListBuilder(error) => fmt::Display::fmt(error, f),
            #[cfg(feature = "debugging")]
            Self::SvgOutput(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<LBError: error::Error> std::error::Error for TriangulationError<LBError> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InternalError(error) => Some(error),
            Self::ListBuilder(error) => error.source(), // This should be Some(error), but that forces restricting LBError to 'static.
            #[cfg(feature = "debugging")]
            Self::SvgOutput(error) => Some(error),
        }
    }
}

/// A polygon has more vertices than the requested index type can address.
///
/// Returned by [Polygon::index_with](crate::Polygon::index_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOverflow {
    vertex_count: usize,
    index_type: &'static str,
}

impl IndexOverflow {
    pub(crate) fn new<Index>(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            index_type: std::any::type_name::<Index>(),
        }
    }

    /// The number of vertices in the offending polygon
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The name of the index type which was too narrow
    pub fn index_type(&self) -> &'static str {
        self.index_type
    }
}

impl fmt::Display for IndexOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon contains {} vertices, which cannot all be indexed by {}", self.vertex_count, self.index_type)
    }
}

impl error::Error for IndexOverflow { }
