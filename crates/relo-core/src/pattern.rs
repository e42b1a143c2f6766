//! Anchor markers and span matching.
//!
//! Anchors are literal text markers that may contain wildcard gap tokens:
//! ```text
//! <div className="{{...}}">
//! ```
//! A gap matches any text, including newlines. Whether gaps (and the
//! implicit gap between a pattern's prefix and suffix) extend as far as
//! possible or stop at the first viable boundary is an explicit
//! [`Wildcard`] choice, never an implicit default.

use std::ops::Range;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token inside a marker that stands for "any text, including newlines"
pub const GAP_TOKEN: &str = "{{...}}";

/// How wildcard gaps behave when their surrounding markers recur.
///
/// With `Greedy`, a span extends as far as possible while still allowing
/// the suffix marker to be found; with `Lazy` it ends at the first
/// occurrence of the suffix after the prefix. When marker text recurs in
/// the document, the two modes produce different spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wildcard {
    Greedy,
    Lazy,
}

impl Wildcard {
    fn gap_pattern(self) -> &'static str {
        match self {
            Self::Greedy => "(?s:.*)",
            Self::Lazy => "(?s:.*?)",
        }
    }
}

/// A single boundary marker, compiled for matching.
#[derive(Debug, Clone)]
pub struct Anchor {
    marker: String,
    regex: Regex,
}

impl Anchor {
    /// Compile a marker into an anchor.
    ///
    /// Literal segments are matched exactly; gap tokens match any text
    /// with the given wildcard mode. A marker consisting only of gaps is
    /// rejected: it can never bound anything specific.
    pub fn new(marker: impl Into<String>, wildcard: Wildcard) -> Result<Self> {
        let marker = marker.into();
        let pattern = compile_marker(&marker, wildcard)?;
        let regex = Regex::new(&pattern)
            .map_err(|e| Error::invalid_anchor(&marker, e.to_string()))?;
        Ok(Self { marker, regex })
    }

    /// The original marker text, gap tokens included
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Find the first match of this anchor, scanning left to right.
    ///
    /// Returns `None` when the marker does not occur; callers treat this
    /// as "no match", not as an error.
    pub fn find(&self, document: &str) -> Option<Range<usize>> {
        self.regex.find(document).map(|m| m.range())
    }

    pub(crate) fn as_pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// A pair of anchors bounding a span.
///
/// The span starts where the prefix marker starts and ends where the
/// suffix marker ends. The text between the two markers is unconstrained
/// and follows the pattern's wildcard mode, as do any gaps inside the
/// markers themselves.
#[derive(Debug, Clone)]
pub struct AnchorPattern {
    prefix: Anchor,
    suffix: Anchor,
    wildcard: Wildcard,
    regex: Regex,
}

impl AnchorPattern {
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        wildcard: Wildcard,
    ) -> Result<Self> {
        let prefix = Anchor::new(prefix, wildcard)?;
        let suffix = Anchor::new(suffix, wildcard)?;
        let combined = format!(
            "{}{}{}",
            prefix.as_pattern(),
            wildcard.gap_pattern(),
            suffix.as_pattern()
        );
        let regex = Regex::new(&combined)
            .map_err(|e| Error::invalid_anchor(prefix.marker(), e.to_string()))?;
        Ok(Self {
            prefix,
            suffix,
            wildcard,
            regex,
        })
    }

    pub fn prefix(&self) -> &Anchor {
        &self.prefix
    }

    pub fn suffix(&self) -> &Anchor {
        &self.suffix
    }

    pub fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    /// Find the first span bounded by this pattern, scanning left to right.
    ///
    /// The returned range starts at the prefix match and ends at the end
    /// of the suffix match, so the denoted substring contains both
    /// markers. Returns `None` when the pattern does not occur.
    pub fn find_span(&self, document: &str) -> Option<Range<usize>> {
        self.regex.find(document).map(|m| m.range())
    }
}

fn compile_marker(marker: &str, wildcard: Wildcard) -> Result<String> {
    let mut pattern = String::with_capacity(marker.len() * 2);
    let mut has_literal = false;

    for (i, segment) in marker.split(GAP_TOKEN).enumerate() {
        if i > 0 {
            pattern.push_str(wildcard.gap_pattern());
        }
        if !segment.is_empty() {
            has_literal = true;
            pattern.push_str(&regex::escape(segment));
        }
    }

    if !has_literal {
        return Err(Error::EmptyAnchor {
            marker: marker.to_string(),
        });
    }

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_anchor_finds_first_occurrence() {
        let anchor = Anchor::new("[TARGET]", Wildcard::Lazy).unwrap();
        let range = anchor.find("ab[TARGET]cd[TARGET]").unwrap();
        assert_eq!(range, 2..10);
    }

    #[test]
    fn anchor_without_literal_text_is_rejected() {
        let err = Anchor::new("{{...}}", Wildcard::Lazy).unwrap_err();
        assert!(matches!(err, Error::EmptyAnchor { .. }));
    }

    #[test]
    fn gap_inside_anchor_matches_across_newlines() {
        let anchor = Anchor::new("<div {{...}}>", Wildcard::Lazy).unwrap();
        let doc = "x<div class=\"a\"\n  id=\"b\">y";
        let range = anchor.find(doc).unwrap();
        assert_eq!(&doc[range], "<div class=\"a\"\n  id=\"b\">");
    }

    #[test]
    fn regex_metacharacters_in_markers_are_literal() {
        let anchor = Anchor::new("a.*b(c)", Wildcard::Lazy).unwrap();
        assert!(anchor.find("aXb(c)").is_none());
        assert!(anchor.find("a.*b(c)").is_some());
    }
}
