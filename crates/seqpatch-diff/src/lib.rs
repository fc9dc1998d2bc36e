//! Diff engine for seqpatch.
//!
//! Computes the minimal ordered edit script transforming one sequence into
//! another under a caller-supplied equivalence relation, with synchronous and
//! asynchronous forms and cooperative cancellation.
//!
//! # Key Types
//!
//! - [`Equivalence`] / [`AsyncEquivalence`] -- Caller-supplied equality and hash capability
//! - [`Structural`] / [`Blocking`] -- Default provider and sync-to-async adapter
//! - [`CancelToken`] -- Cooperative cancellation observed between table rows
//! - [`DiffError`] -- Failure of the whole diff call; no partial scripts
//!
//! # Operations
//!
//! - [`diff`] / [`diff_with_cancel`]
//! - [`diff_async`] / [`diff_async_with_cancel`]

pub mod cancel;
pub mod engine;
pub mod equivalence;
pub mod error;

pub use cancel::CancelToken;
pub use engine::{diff, diff_async, diff_async_with_cancel, diff_with_cancel};
pub use equivalence::{AsyncEquivalence, Blocking, Equivalence, EquivalenceError, Structural};
pub use error::{DiffError, DiffResult, Side};
