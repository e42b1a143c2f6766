//! Line diff between input and output documents

use serde::{Deserialize, Serialize};
use similar::TextDiff;

/// Result of comparing the document before and after a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDiff {
    /// Are the two texts identical?
    pub is_equivalent: bool,
    /// Line-level changes, in document order
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

impl DocumentDiff {
    /// Create a diff indicating the texts are identical
    pub fn equivalent() -> Self {
        Self {
            is_equivalent: true,
            changes: Vec::new(),
            similarity: 1.0,
        }
    }

    /// Compute a line-by-line diff between two texts
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::equivalent();
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = text_diff.ratio() as f64;

        let mut changes = Vec::new();
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                similar::ChangeTag::Delete => {
                    changes.push(LineChange::Removed(change.value().to_string()));
                }
                similar::ChangeTag::Insert => {
                    changes.push(LineChange::Added(change.value().to_string()));
                }
                similar::ChangeTag::Equal => {}
            }
        }

        Self {
            is_equivalent: changes.is_empty(),
            changes,
            similarity,
        }
    }
}

impl Default for DocumentDiff {
    fn default() -> Self {
        Self::equivalent()
    }
}

/// A single changed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineChange {
    Added(String),
    Removed(String),
}
