//! LCS-based computation of minimal edit scripts.
//!
//! The engine builds a longest-common-subsequence table over the two input
//! sequences, using the caller's equivalence relation as the match predicate,
//! then backtracks through the table and collapses runs of non-matching
//! steps into `Replace` edits with positional pairing. Surplus elements in a
//! run become trailing `Insert`s or `Delete`s.
//!
//! Tie-breaking during backtracking is deterministic: a diagonal (match)
//! step is taken whenever available, then a vertical (source-consuming) step
//! over a horizontal (target-consuming) one. Identical inputs therefore
//! always produce identical scripts.

use seqpatch_types::{Edit, EditScript};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::equivalence::{AsyncEquivalence, Equivalence, EquivalenceError};
use crate::error::{DiffError, DiffResult, Side};

/// Compute the minimal edit script transforming `source` into `target`.
pub fn diff<T, E>(source: &[T], target: &[T], equivalence: &E) -> DiffResult<EditScript<T>>
where
    T: Clone,
    E: Equivalence<T>,
{
    diff_with_cancel(source, target, equivalence, &CancelToken::new())
}

/// Like [`diff`], honoring a cooperative cancellation token between table
/// rows and backtrack steps.
pub fn diff_with_cancel<T, E>(
    source: &[T],
    target: &[T],
    equivalence: &E,
    token: &CancelToken,
) -> DiffResult<EditScript<T>>
where
    T: Clone,
    E: Equivalence<T>,
{
    let source_hashes = hash_elements(source, Side::Source, equivalence)?;
    let target_hashes = hash_elements(target, Side::Target, equivalence)?;

    let mut matches = MatchMatrix::new(source.len(), target.len());
    for (i, a) in source.iter().enumerate() {
        if token.is_cancelled() {
            return Err(DiffError::Cancelled);
        }
        for (j, b) in target.iter().enumerate() {
            // Equal hashes are necessary for equivalence, so hash-distinct
            // pairs skip the (possibly expensive) equals call entirely.
            if source_hashes[i] == target_hashes[j] && equivalence.equals(a, b)? {
                matches.set(i, j);
            }
        }
    }

    finish(source, target, &matches, token)
}

/// Asynchronous form of [`diff`] for providers whose equality checks suspend.
///
/// Checks are awaited strictly sequentially, never concurrently, so table
/// construction stays deterministic.
pub async fn diff_async<T, E>(
    source: &[T],
    target: &[T],
    equivalence: &E,
) -> DiffResult<EditScript<T>>
where
    T: Clone + Sync,
    E: AsyncEquivalence<T>,
{
    diff_async_with_cancel(source, target, equivalence, &CancelToken::new()).await
}

/// Like [`diff_async`], honoring a cooperative cancellation token.
pub async fn diff_async_with_cancel<T, E>(
    source: &[T],
    target: &[T],
    equivalence: &E,
    token: &CancelToken,
) -> DiffResult<EditScript<T>>
where
    T: Clone + Sync,
    E: AsyncEquivalence<T>,
{
    let mut source_hashes = Vec::with_capacity(source.len());
    for (i, x) in source.iter().enumerate() {
        let h = equivalence
            .hash_value(x)
            .await
            .map_err(|e| element_error(Side::Source, i, e))?;
        source_hashes.push(h);
    }
    let mut target_hashes = Vec::with_capacity(target.len());
    for (j, x) in target.iter().enumerate() {
        let h = equivalence
            .hash_value(x)
            .await
            .map_err(|e| element_error(Side::Target, j, e))?;
        target_hashes.push(h);
    }

    let mut matches = MatchMatrix::new(source.len(), target.len());
    for (i, a) in source.iter().enumerate() {
        if token.is_cancelled() {
            return Err(DiffError::Cancelled);
        }
        for (j, b) in target.iter().enumerate() {
            if source_hashes[i] == target_hashes[j] && equivalence.equals(a, b).await? {
                matches.set(i, j);
            }
        }
    }

    finish(source, target, &matches, token)
}

/// Shared tail of both variants: LCS table, backtrack, run collapsing.
fn finish<T: Clone>(
    source: &[T],
    target: &[T],
    matches: &MatchMatrix,
    token: &CancelToken,
) -> DiffResult<EditScript<T>> {
    let table = lcs_table(matches, token)?;
    let steps = backtrack(&table, matches, token)?;
    let edits = collapse_runs(&steps, source, target);
    debug!(
        source_len = source.len(),
        target_len = target.len(),
        edits = edits.len(),
        "computed edit script"
    );
    Ok(EditScript::new(edits))
}

fn hash_elements<T, E: Equivalence<T>>(
    elements: &[T],
    side: Side,
    equivalence: &E,
) -> DiffResult<Vec<u64>> {
    elements
        .iter()
        .enumerate()
        .map(|(i, x)| {
            equivalence
                .hash_value(x)
                .map_err(|e| element_error(side, i, e))
        })
        .collect()
}

/// A rejected element surfaces with its position; other check failures keep
/// their equivalence-error shape.
fn element_error(side: Side, index: usize, err: EquivalenceError) -> DiffError {
    match err {
        EquivalenceError::InvalidElement(reason) => DiffError::InvalidElement {
            side,
            index,
            reason,
        },
        other => DiffError::Equivalence(other),
    }
}

/// Dense `rows × cols` boolean matrix of resolved equivalence checks.
struct MatchMatrix {
    data: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl MatchMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    fn get(&self, i: usize, j: usize) -> bool {
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize) {
        self.data[i * self.cols + j] = true;
    }
}

/// `(rows+1) × (cols+1)` LCS length table, row-major.
fn lcs_table(matches: &MatchMatrix, token: &CancelToken) -> DiffResult<Vec<usize>> {
    let (n, m) = (matches.rows, matches.cols);
    let w = m + 1;
    let mut table = vec![0usize; (n + 1) * w];
    for i in 1..=n {
        if token.is_cancelled() {
            return Err(DiffError::Cancelled);
        }
        for j in 1..=m {
            table[i * w + j] = if matches.get(i - 1, j - 1) {
                table[(i - 1) * w + (j - 1)] + 1
            } else {
                table[(i - 1) * w + j].max(table[i * w + (j - 1)])
            };
        }
    }
    Ok(table)
}

/// One step of the alignment, in forward (ascending) order after backtrack.
enum Step {
    /// Source and target elements matched; consumes one of each, no edit.
    Matched,
    /// Source element at this index has no target counterpart.
    SourceOnly(usize),
    /// Target element at this index has no source counterpart.
    TargetOnly(usize),
}

fn backtrack(
    table: &[usize],
    matches: &MatchMatrix,
    token: &CancelToken,
) -> DiffResult<Vec<Step>> {
    let (n, m) = (matches.rows, matches.cols);
    let w = m + 1;
    let mut steps = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if token.is_cancelled() {
            return Err(DiffError::Cancelled);
        }
        if i > 0
            && j > 0
            && matches.get(i - 1, j - 1)
            && table[i * w + j] == table[(i - 1) * w + (j - 1)] + 1
        {
            steps.push(Step::Matched);
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || table[(i - 1) * w + j] == table[i * w + j]) {
            steps.push(Step::SourceOnly(i - 1));
            i -= 1;
        } else {
            steps.push(Step::TargetOnly(j - 1));
            j -= 1;
        }
    }
    steps.reverse();
    Ok(steps)
}

/// Collapse maximal runs of non-matching steps into edits.
///
/// Within a run, source-consumed and target-consumed elements pair up
/// positionally as `Replace`s; surplus target elements become trailing
/// `Insert`s and surplus source elements trailing `Delete`s. A run that is
/// one-sided yields pure Inserts or pure Deletes.
fn collapse_runs<T: Clone>(steps: &[Step], source: &[T], target: &[T]) -> Vec<Edit<T>> {
    let mut edits = Vec::new();
    let mut removed: Vec<usize> = Vec::new();
    let mut added: Vec<usize> = Vec::new();
    for step in steps {
        match step {
            Step::Matched => flush_run(&mut edits, &mut removed, &mut added, source, target),
            Step::SourceOnly(i) => removed.push(*i),
            Step::TargetOnly(j) => added.push(*j),
        }
    }
    flush_run(&mut edits, &mut removed, &mut added, source, target);
    edits
}

fn flush_run<T: Clone>(
    edits: &mut Vec<Edit<T>>,
    removed: &mut Vec<usize>,
    added: &mut Vec<usize>,
    source: &[T],
    target: &[T],
) {
    let paired = removed.len().min(added.len());
    for k in 0..paired {
        edits.push(Edit::Replace {
            index: added[k],
            old_value: source[removed[k]].clone(),
            new_value: target[added[k]].clone(),
        });
    }
    for &j in &added[paired..] {
        edits.push(Edit::Insert {
            index: j,
            value: target[j].clone(),
        });
    }
    for &i in &removed[paired..] {
        edits.push(Edit::Delete {
            index: i,
            value: source[i].clone(),
        });
    }
    removed.clear();
    added.clear();
}
