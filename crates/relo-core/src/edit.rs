//! Edit records for document mutations

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// A section was removed from the document.
    SectionRemove,
    /// A section was spliced into the document.
    SectionInsert,
}

/// One applied mutation, recorded for the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Byte range the edit covers in the document it was applied to.
    /// For removals this is the removed span; for insertions it is the
    /// span the new content occupies after splicing.
    pub span: Range<usize>,
    /// Content removed by the edit (empty for insertions).
    pub old_content: String,
    /// Content added by the edit (empty for removals).
    pub new_content: String,
}

impl Edit {
    /// Apply this edit to a source string, returning the edited copy.
    ///
    /// Removals replace `span` with nothing; insertions splice
    /// `new_content` in at `span.start`.
    pub fn apply(&self, source: &str) -> String {
        let mut result =
            String::with_capacity(source.len() + self.new_content.len() - self.old_content.len());
        match self.kind {
            EditKind::SectionRemove => {
                result.push_str(&source[..self.span.start]);
                result.push_str(&source[self.span.end..]);
            }
            EditKind::SectionInsert => {
                result.push_str(&source[..self.span.start]);
                result.push_str(&self.new_content);
                result.push_str(&source[self.span.start..]);
            }
        }
        result
    }
}
