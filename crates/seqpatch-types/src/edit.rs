//! Tagged edit operations and the ordered edit script.
//!
//! An [`EditScript`] is the output of the diff engine and the input to the
//! patch applier: a flat, ordered list of [`Edit`]s that transforms a source
//! sequence into a target sequence. Unchanged elements produce no edit.

use serde::{Deserialize, Serialize};

/// A single edit operation against a sequence.
///
/// Indices for `Insert` and `Replace` are positions in the *resulting*
/// target sequence; indices for `Delete` are positions in the *original*
/// source sequence, never remapped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Edit<T> {
    /// A new element appears in the target with no counterpart in the source.
    Insert {
        index: usize,
        #[serde(rename = "newValue")]
        value: T,
    },
    /// A source element has no counterpart in the target.
    Delete {
        index: usize,
        #[serde(rename = "oldValue")]
        value: T,
    },
    /// Source and target both have an element at this position, but they are
    /// not equivalent.
    Replace {
        index: usize,
        #[serde(rename = "oldValue")]
        old_value: T,
        #[serde(rename = "newValue")]
        new_value: T,
    },
}

impl<T> Edit<T> {
    /// The position this edit applies to.
    pub fn index(&self) -> usize {
        match self {
            Edit::Insert { index, .. } => *index,
            Edit::Delete { index, .. } => *index,
            Edit::Replace { index, .. } => *index,
        }
    }

    /// The discriminant name, for logging and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Edit::Insert { .. } => "Insert",
            Edit::Delete { .. } => "Delete",
            Edit::Replace { .. } => "Replace",
        }
    }
}

/// An ordered, immutable sequence of edits.
///
/// Two scripts are equal iff their edit sequences are equal element-wise.
/// Serializes transparently as the flat ordered list of tagged records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript<T> {
    edits: Vec<Edit<T>>,
}

impl<T> EditScript<T> {
    /// Create a script from an already-ordered list of edits.
    pub fn new(edits: Vec<Edit<T>>) -> Self {
        Self { edits }
    }

    /// The empty script (source and target already agree).
    pub fn empty() -> Self {
        Self { edits: Vec::new() }
    }

    /// Returns `true` if there are no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Iterate over the edits in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edit<T>> {
        self.edits.iter()
    }

    /// The edits as a slice, in application order.
    pub fn as_slice(&self) -> &[Edit<T>] {
        &self.edits
    }

    /// Number of `Insert` edits.
    pub fn insertions(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| matches!(e, Edit::Insert { .. }))
            .count()
    }

    /// Number of `Delete` edits.
    pub fn deletions(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| matches!(e, Edit::Delete { .. }))
            .count()
    }

    /// Number of `Replace` edits.
    pub fn replacements(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| matches!(e, Edit::Replace { .. }))
            .count()
    }
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<Edit<T>>> for EditScript<T> {
    fn from(edits: Vec<Edit<T>>) -> Self {
        Self::new(edits)
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = Edit<T>;
    type IntoIter = std::vec::IntoIter<Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a Edit<T>;
    type IntoIter = std::slice::Iter<'a, Edit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_script() -> EditScript<&'static str> {
        EditScript::new(vec![
            Edit::Replace {
                index: 1,
                old_value: "b",
                new_value: "x",
            },
            Edit::Insert {
                index: 2,
                value: "y",
            },
            Edit::Delete {
                index: 3,
                value: "d",
            },
        ])
    }

    #[test]
    fn empty_script() {
        let script: EditScript<u8> = EditScript::empty();
        assert!(script.is_empty());
        assert_eq!(script.len(), 0);
    }

    #[test]
    fn counters() {
        let script = sample_script();
        assert_eq!(script.len(), 3);
        assert_eq!(script.insertions(), 1);
        assert_eq!(script.deletions(), 1);
        assert_eq!(script.replacements(), 1);
    }

    #[test]
    fn index_accessor() {
        let script = sample_script();
        let indices: Vec<usize> = script.iter().map(|e| e.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn kind_names() {
        let script = sample_script();
        let kinds: Vec<&str> = script.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["Replace", "Insert", "Delete"]);
    }

    #[test]
    fn elementwise_equality() {
        let a = sample_script();
        let b = sample_script();
        assert_eq!(a, b);

        let c = EditScript::new(vec![Edit::Insert {
            index: 0,
            value: "z",
        }]);
        assert_ne!(a, c);
    }

    #[test]
    fn iteration_preserves_order() {
        let script = sample_script();
        let owned: Vec<Edit<&str>> = script.clone().into_iter().collect();
        assert_eq!(owned.as_slice(), script.as_slice());
    }

    #[test]
    fn serializes_as_flat_tagged_list() {
        let script = sample_script();
        let value = serde_json::to_value(&script).unwrap();
        assert_eq!(
            value,
            json!([
                { "kind": "Replace", "index": 1, "oldValue": "b", "newValue": "x" },
                { "kind": "Insert", "index": 2, "newValue": "y" },
                { "kind": "Delete", "index": 3, "oldValue": "d" },
            ])
        );
    }

    #[test]
    fn round_trips_through_json() {
        let script = sample_script();
        let text = serde_json::to_string(&script).unwrap();
        let back: EditScript<String> = serde_json::from_str(&text).unwrap();

        let expected = EditScript::new(vec![
            Edit::Replace {
                index: 1,
                old_value: "b".to_string(),
                new_value: "x".to_string(),
            },
            Edit::Insert {
                index: 2,
                value: "y".to_string(),
            },
            Edit::Delete {
                index: 3,
                value: "d".to_string(),
            },
        ]);
        assert_eq!(back, expected);
    }
}
