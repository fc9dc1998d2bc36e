//! Error types for the diff crate.

use crate::equivalence::EquivalenceError;

/// Which input sequence an element came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

/// Errors that can occur while computing a diff.
///
/// The whole call fails on any of these; no partial edit script is ever
/// returned and nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An input element was rejected by the equivalence provider.
    #[error("invalid element in {side} sequence at index {index}: {reason}")]
    InvalidElement {
        side: Side,
        index: usize,
        reason: String,
    },

    /// An equality or hash check raised or timed out.
    #[error("equivalence check failed: {0}")]
    Equivalence(#[from] EquivalenceError),

    /// Cooperative cancellation was observed mid-computation.
    #[error("diff cancelled")]
    Cancelled,
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
