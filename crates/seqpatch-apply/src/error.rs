//! Error types for patch application.

/// Errors that can occur while applying an edit script.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApplyError {
    /// An edit referenced a position outside the working sequence, which
    /// means the script does not belong to this source.
    #[error("edit index {index} out of bounds for sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },
}

/// Convenience alias for apply results.
pub type ApplyResult<T> = Result<T, ApplyError>;
