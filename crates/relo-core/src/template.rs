//! Section templates.
//!
//! A template is the literal text of the rebuilt section. References to
//! variables or fields of the host document's evaluation context are plain
//! text here and pass through verbatim; nothing is computed or resolved.
//! The one token with meaning to this tool is the section slot:
//! ```text
//! <div class="wrapper">
//! {{section}}
//! </div>
//! ```
//! which rendering replaces with the extracted section's text.

use crate::error::{Error, Result};
use crate::section::Section;

/// Token replaced by the extracted section's text at render time
pub const SECTION_SLOT: &str = "{{section}}";

/// A validated template for the rebuilt section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTemplate {
    body: String,
    fragment: bool,
}

impl SectionTemplate {
    /// Validate and wrap a self-contained template body.
    ///
    /// Structural delimiters `()`, `[]`, `{}` outside quoted runs must be
    /// balanced; an unbalanced body is a configuration error raised here,
    /// before any document is touched.
    pub fn new(body: impl Into<String>) -> Result<Self> {
        let body = body.into();
        validate_delimiters(&body, false)?;
        Ok(Self {
            body,
            fragment: false,
        })
    }

    /// Validate and wrap a fragment template body.
    ///
    /// A fragment splices into surrounding structure that the pattern
    /// author accounts for, so it may close delimiters it never opened
    /// (for the enclosing context) and leave its own openers for the
    /// context to close. Delimiters paired inside the body must still
    /// nest correctly.
    pub fn fragment(body: impl Into<String>) -> Result<Self> {
        let body = body.into();
        validate_delimiters(&body, true)?;
        Ok(Self {
            body,
            fragment: true,
        })
    }

    /// Whether this template was built with fragment tolerance
    pub fn is_fragment(&self) -> bool {
        self.fragment
    }

    /// The raw template body, slot token included
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body contains a section slot
    pub fn has_slot(&self) -> bool {
        self.body.contains(SECTION_SLOT)
    }

    /// Render the section text.
    ///
    /// Deterministic in its inputs: the body is emitted verbatim, with
    /// every slot occurrence replaced by the extracted section's content,
    /// or by nothing when the removal stage matched nothing.
    pub fn render(&self, extracted: Option<&Section>) -> String {
        if !self.has_slot() {
            return self.body.clone();
        }
        let filler = extracted.map(|s| s.content.as_str()).unwrap_or("");
        self.body.replace(SECTION_SLOT, filler)
    }
}

/// Check that structural delimiters pair up, ignoring quoted runs.
///
/// Quote handling is intentionally shallow: `'`, `"`, and `` ` `` each
/// open a run closed by the same unescaped character. Templates are host
/// markup, not code this tool understands.
///
/// In fragment mode, a closer hitting an empty stack and openers left at
/// the end belong to the surrounding context and pass; a closer that
/// crosses an opener of the wrong kind never does.
fn validate_delimiters(body: &str, fragment: bool) -> Result<()> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (pos, ch) in body.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '(' | '[' | '{' => stack.push((ch, pos)),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    Some((open, _)) => {
                        return Err(Error::malformed_template(
                            pos,
                            format!("`{ch}` closes unmatched `{open}`"),
                        ));
                    }
                    None if fragment => {}
                    None => {
                        return Err(Error::malformed_template(
                            pos,
                            format!("`{ch}` has no opening delimiter"),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    if !fragment {
        if let Some((open, pos)) = stack.pop() {
            return Err(Error::malformed_template(
                pos,
                format!("`{open}` is never closed"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_slot_is_body_verbatim() {
        let template = SectionTemplate::new("<p>{totals.count}</p>").unwrap();
        assert_eq!(template.render(None), "<p>{totals.count}</p>");
    }

    #[test]
    fn render_fills_slot_with_section_content() {
        let template = SectionTemplate::new("<div>\n{{section}}\n</div>").unwrap();
        let section = Section::new("inner", 0..5);
        assert_eq!(template.render(Some(&section)), "<div>\ninner\n</div>");
    }

    #[test]
    fn render_with_missing_section_empties_slot() {
        let template = SectionTemplate::new("<div>{{section}}</div>").unwrap();
        assert_eq!(template.render(None), "<div></div>");
    }

    #[test]
    fn unclosed_delimiter_is_rejected() {
        let err = SectionTemplate::new("<div>(oops</div>").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { position: 5, .. }));
    }

    #[test]
    fn mismatched_delimiter_is_rejected() {
        let err = SectionTemplate::new("(a]").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { position: 2, .. }));
    }

    #[test]
    fn delimiters_inside_quotes_are_ignored() {
        let template = SectionTemplate::new(r#"<p title="(unclosed">ok</p>"#).unwrap();
        assert_eq!(template.body(), r#"<p title="(unclosed">ok</p>"#);
    }

    #[test]
    fn fragment_tolerates_context_delimiters() {
        // closes the previous ternary arm, opens the next one
        let template = SectionTemplate::fragment(") : tab === 'x' ? (").unwrap();
        assert!(template.is_fragment());
    }

    #[test]
    fn fragment_still_rejects_crossed_pairs() {
        let err = SectionTemplate::fragment("([)]").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { position: 2, .. }));
    }
}
