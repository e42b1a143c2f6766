//! Extracted section type

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ops::Range;

/// An opaque block of document text cut out by the extractor.
///
/// The content is never parsed; the checksum lets callers confirm which
/// bytes moved after a run completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The literal text of the span, markers included
    pub content: String,
    /// Byte range the section occupied in the source document
    pub span: Range<usize>,
    checksum: String,
}

impl Section {
    pub fn new(content: impl Into<String>, span: Range<usize>) -> Self {
        let content = content.into();
        let checksum = Self::compute_checksum(&content);
        Self {
            content,
            span,
            checksum,
        }
    }

    /// SHA-256 of the section content, hex encoded
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Verify content matches a given checksum
    pub fn verify_checksum(&self, expected: &str) -> bool {
        self.checksum == expected
    }

    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let result = hasher.finalize();
        format!("{:x}", result)
    }
}
