//! Error type shared by every constructor and solver in the crate.

use std::fmt;

/// Errors surfaced by constructors, the linear solver and number parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Geometric preconditions or algebraic consistency checks failed.
    InvalidConstruction { reason: String },
    /// The main determinant of a linear system is zero.
    SingularSystem,
    /// A string could not be read as an exact rational.
    InvalidNumber { input: String },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(reason = %reason, "construction rejected");
        Self::InvalidConstruction { reason }
    }

    /// Re-labels a solver failure as a construction failure with `reason`.
    pub(crate) fn into_invalid(self, reason: &str) -> Self {
        match self {
            Self::SingularSystem => Self::invalid(reason),
            other => other,
        }
    }

    /// True for the construction-failure kind.
    pub fn is_invalid_construction(&self) -> bool {
        matches!(self, Self::InvalidConstruction { .. })
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstruction { reason } => write!(f, "invalid construction: {reason}"),
            Self::SingularSystem => write!(f, "linear system is singular (zero determinant)"),
            Self::InvalidNumber { input } => write!(f, "not an exact rational: {input:?}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Crate-wide result alias.
pub type GeomResult<T> = Result<T, GeomError>;
