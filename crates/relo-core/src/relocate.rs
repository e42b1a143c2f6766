//! The relocation pipeline: locate, excise, rebuild, reinsert.
//!
//! A strict two-stage sequence with no branching and no retries. The
//! pipeline works on an owned copy of the document and only hands it back
//! on success, so the caller's document is untouched whenever a stage
//! fails.

use tracing::{debug, warn};

use crate::document::Document;
use crate::edit::Edit;
use crate::error::{Error, Result};
use crate::pattern::{Anchor, AnchorPattern};
use crate::section::Section;
use crate::template::SectionTemplate;

/// The fixed constants of one run: what to cut, what to build, where to
/// splice it in.
#[derive(Debug, Clone)]
pub struct Relocation {
    /// Pattern bounding the section to remove
    pub removal: AnchorPattern,
    /// Anchor the rebuilt section is inserted immediately before
    pub target: Anchor,
    /// Template for the rebuilt section
    pub template: SectionTemplate,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Relocated {
    /// The transformed document
    pub document: Document,
    /// The section cut in the removal stage, if its pattern matched
    pub removed: Option<Section>,
    /// Byte offset the rebuilt section was spliced in at
    pub inserted_at: usize,
    /// The rebuilt section text as spliced
    pub inserted: String,
    /// Edit records in application order
    pub edits: Vec<Edit>,
}

impl Relocation {
    pub fn new(removal: AnchorPattern, target: Anchor, template: SectionTemplate) -> Self {
        Self {
            removal,
            target,
            template,
        }
    }

    /// Run the pipeline against a document.
    ///
    /// Stage one: match the removal pattern and excise its span. A
    /// missing removal pattern is not an error; the document may already
    /// be in the desired state from a prior partial run, so the stage
    /// records nothing removed and continues.
    ///
    /// Stage two: build the section and splice it immediately before the
    /// target anchor. A missing target is [`Error::TargetNotFound`]:
    /// dropping the built section silently would lose the extracted
    /// content.
    pub fn apply(&self, document: &Document) -> Result<Relocated> {
        let mut working = document.clone();
        let mut edits = Vec::new();

        let removed = match self.removal.find_span(working.source()) {
            Some(span) => {
                debug!(start = span.start, end = span.end, "removal pattern matched");
                let (section, edit) = working.excise(span);
                edits.push(edit);
                Some(section)
            }
            None => {
                warn!(
                    prefix = self.removal.prefix().marker(),
                    "removal pattern not found; nothing to remove"
                );
                None
            }
        };

        let rebuilt = self.template.render(removed.as_ref());

        let Some(target_range) = self.target.find(working.source()) else {
            return Err(Error::TargetNotFound {
                anchor: self.target.marker().to_string(),
            });
        };

        let inserted_at = target_range.start;
        debug!(offset = inserted_at, "splicing rebuilt section before target");
        let edit = working.splice(inserted_at, &rebuilt);
        edits.push(edit);

        Ok(Relocated {
            document: working,
            removed,
            inserted_at,
            inserted: rebuilt,
            edits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Wildcard;

    fn plan(template: &str) -> Relocation {
        Relocation::new(
            AnchorPattern::new("[REMOVE]", "[/REMOVE]", Wildcard::Lazy).unwrap(),
            Anchor::new("[TARGET]", Wildcard::Lazy).unwrap(),
            SectionTemplate::new(template).unwrap(),
        )
    }

    #[test]
    fn relocates_section_before_target() {
        let doc = Document::new("A[REMOVE]old-block[/REMOVE]B[TARGET]C");
        let outcome = plan("<rebuilt-block>").apply(&doc).unwrap();

        assert_eq!(outcome.document.source(), "AB<rebuilt-block>[TARGET]C");
        assert_eq!(
            outcome.removed.unwrap().content,
            "[REMOVE]old-block[/REMOVE]"
        );
        assert_eq!(outcome.inserted_at, 2);
        assert_eq!(outcome.edits.len(), 2);
    }

    #[test]
    fn missing_removal_pattern_still_inserts() {
        let doc = Document::new("AB[TARGET]C");
        let outcome = plan("<rebuilt-block>").apply(&doc).unwrap();

        assert!(outcome.removed.is_none());
        assert_eq!(outcome.document.source(), "AB<rebuilt-block>[TARGET]C");
        assert_eq!(outcome.edits.len(), 1);
    }

    #[test]
    fn missing_target_is_fatal_and_input_untouched() {
        let doc = Document::new("A[REMOVE]x[/REMOVE]B");
        let err = plan("<rebuilt>").apply(&doc).unwrap_err();

        assert!(matches!(err, Error::TargetNotFound { .. }));
        assert_eq!(doc.source(), "A[REMOVE]x[/REMOVE]B");
        assert!(!doc.is_modified());
    }

    #[test]
    fn slot_template_carries_extracted_section() {
        let doc = Document::new("A[REMOVE]x[/REMOVE]B[TARGET]C");
        let outcome = plan("<wrap>{{section}}</wrap>").apply(&doc).unwrap();

        assert_eq!(
            outcome.document.source(),
            "AB<wrap>[REMOVE]x[/REMOVE]</wrap>[TARGET]C"
        );
    }
}
