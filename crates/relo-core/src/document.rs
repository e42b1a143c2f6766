//! Document value and structural edits

use std::ops::Range;

use crate::edit::{Edit, EditKind};
use crate::section::Section;

/// The text being edited.
///
/// Holds the source as handed over by the storage collaborator plus the
/// original for modification tracking. All edits are sequential; every
/// byte outside an edited span is preserved exactly, including
/// whitespace and line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    original_source: String,
    source: String,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            original_source: source.clone(),
            source,
        }
    }

    /// Get current source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consume the document, yielding the current source
    pub fn into_source(self) -> String {
        self.source
    }

    /// Check if the document differs from the source it was created with
    pub fn is_modified(&self) -> bool {
        self.source != self.original_source
    }

    /// Remove a span, returning the cut text and the edit record.
    ///
    /// The span must lie on character boundaries within the document;
    /// spans produced by [`AnchorPattern::find_span`] always do.
    ///
    /// [`AnchorPattern::find_span`]: crate::pattern::AnchorPattern::find_span
    pub fn excise(&mut self, span: Range<usize>) -> (Section, Edit) {
        let removed = self.source[span.clone()].to_string();
        let edit = Edit {
            kind: EditKind::SectionRemove,
            span: span.clone(),
            old_content: removed.clone(),
            new_content: String::new(),
        };
        self.source = edit.apply(&self.source);
        (Section::new(removed, span), edit)
    }

    /// Splice text in at a byte offset, returning the edit record.
    pub fn splice(&mut self, offset: usize, text: &str) -> Edit {
        let edit = Edit {
            kind: EditKind::SectionInsert,
            span: offset..offset + text.len(),
            old_content: String::new(),
            new_content: text.to_string(),
        };
        self.source = edit.apply(&self.source);
        edit
    }
}
