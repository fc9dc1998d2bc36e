//! High-level API for seqpatch.
//!
//! Provides a unified surface over the diff engine and the patch applier.
//! This is the main entry point for applications embedding seqpatch.
//!
//! # Example
//!
//! ```
//! use seqpatch::{apply, diff, Structural};
//!
//! let current = vec!["a", "b", "c"];
//! let desired = vec!["a", "x", "c", "d"];
//!
//! let script = diff(&current, &desired, &Structural)?;
//! assert_eq!(apply(&current, &script)?, desired);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export key types
pub use seqpatch_types::{Edit, EditScript};

pub use seqpatch_diff::{
    diff, diff_async, diff_async_with_cancel, diff_with_cancel, AsyncEquivalence, Blocking,
    CancelToken, DiffError, DiffResult, Equivalence, EquivalenceError, Side, Structural,
};

pub use seqpatch_apply::{apply, ApplyError, ApplyResult};
