//! Patch applier for seqpatch.
//!
//! Consumes a source sequence plus an edit script produced by the diff
//! engine and reconstructs the target sequence. Application is all-or-nothing:
//! a script whose indices do not fit the source fails with
//! [`ApplyError::InvalidIndex`] and no partially modified sequence is ever
//! observable.

pub mod error;

pub use error::{ApplyError, ApplyResult};

use seqpatch_types::{Edit, EditScript};
use tracing::debug;

/// Apply `script` to `source`, producing the reconstructed target.
///
/// Edits are applied in script order against a working copy. `Insert` and
/// `Replace` indices are positions in the evolving sequence and are used
/// directly; `Delete` indices are positions in the original source, so a
/// running offset tracks the net length change from earlier inserts and
/// deletes to land them on the right evolving position.
pub fn apply<T: Clone>(source: &[T], script: &EditScript<T>) -> ApplyResult<Vec<T>> {
    let mut working: Vec<T> = source.to_vec();
    let mut offset: isize = 0;

    for edit in script {
        match edit {
            Edit::Insert { index, value } => {
                if *index > working.len() {
                    return Err(ApplyError::InvalidIndex {
                        index: *index,
                        len: working.len(),
                    });
                }
                working.insert(*index, value.clone());
                offset += 1;
            }
            Edit::Replace {
                index, new_value, ..
            } => {
                if *index >= working.len() {
                    return Err(ApplyError::InvalidIndex {
                        index: *index,
                        len: working.len(),
                    });
                }
                working[*index] = new_value.clone();
            }
            Edit::Delete { index, .. } => {
                let position = *index as isize + offset;
                if position < 0 || position as usize >= working.len() {
                    return Err(ApplyError::InvalidIndex {
                        index: *index,
                        len: working.len(),
                    });
                }
                working.remove(position as usize);
                offset -= 1;
            }
        }
    }

    debug!(
        source_len = source.len(),
        target_len = working.len(),
        edits = script.len(),
        "applied edit script"
    );
    Ok(working)
}
