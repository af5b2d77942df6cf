//! Result of a store operation that never fails outright.
//!
//! Store operations always hand back a value of the expected shape. When the
//! remote service could not supply it, the value is substitute data and the
//! cause travels alongside it.

use crate::error::DashboardError;

/// The value produced by a store operation, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The remote service answered and this is its (normalized) data.
    Live(T),
    /// The remote call failed; `value` is substitute data.
    Fallback { value: T, error: DashboardError },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, error: DashboardError) -> Self {
        Self::Fallback { value, error }
    }

    /// Borrows the carried value regardless of origin.
    pub fn value(&self) -> &T {
        match self {
            Self::Live(value) => value,
            Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Live(value) => value,
            Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// The failure that caused substitution, if any.
    pub fn error(&self) -> Option<&DashboardError> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { error, .. } => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Live(value) => Outcome::Live(f(value)),
            Self::Fallback { value, error } => Outcome::Fallback {
                value: f(value),
                error,
            },
        }
    }
}
