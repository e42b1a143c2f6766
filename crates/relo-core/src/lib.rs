//! Section location, extraction, and relocation for Relo
//!
//! Provides the pipeline that locates an anchor-bounded section in a
//! document, excises it, rebuilds it from a template, and splices the
//! result in front of a target anchor.

pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod pattern;
pub mod relocate;
pub mod section;
pub mod template;

pub use diff::{DocumentDiff, LineChange};
pub use document::Document;
pub use edit::{Edit, EditKind};
pub use error::{Error, Result};
pub use pattern::{Anchor, AnchorPattern, Wildcard};
pub use relocate::{Relocated, Relocation};
pub use section::Section;
pub use template::SectionTemplate;
