//! Foundation types for seqpatch.
//!
//! This crate provides the edit-script data model shared by the diff engine
//! and the patch applier. Every other seqpatch crate depends on
//! `seqpatch-types`.
//!
//! # Key Types
//!
//! - [`Edit`] — Tagged edit operation (Insert / Delete / Replace)
//! - [`EditScript`] — Ordered, immutable sequence of edits

pub mod edit;

pub use edit::{Edit, EditScript};
