//! Run plans: the fixed constants of one invocation.
//!
//! A plan names the removal pattern, the insertion anchor, the wildcard
//! mode, and the section template. The binary carries a compiled-in
//! default plan; a TOML file given with `--plan` replaces it wholesale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use relo_core::{Anchor, AnchorPattern, Relocation, SectionTemplate, Wildcard};

use crate::error::{CliError, Result};

/// Serializable form of a [`Relocation`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Wildcard mode for every gap in the plan's anchors
    pub wildcard: Wildcard,
    pub remove: RemoveSpec,
    pub insert: InsertSpec,
    pub section: SectionSpec,
}

/// Anchors bounding the section to cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSpec {
    pub prefix: String,
    pub suffix: String,
}

/// Where the rebuilt section goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertSpec {
    /// The rebuilt section is spliced immediately before this anchor
    pub before: String,
}

/// The rebuilt section's template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub template: String,
    /// Allow the template to open/close delimiters owned by the
    /// surrounding document structure
    #[serde(default)]
    pub fragment: bool,
}

impl Plan {
    /// The compiled-in default plan: move the customer categorization
    /// section out of the sales tab and rebuild it as its own tab arm,
    /// spliced in ahead of the closing `) : null}` arm.
    pub fn builtin() -> Self {
        Self {
            wildcard: Wildcard::Lazy,
            remove: RemoveSpec {
                prefix: "{/* Customer Categorization Section */}".to_string(),
                suffix: "{/* /Customer Categorization Section */}".to_string(),
            },
            insert: InsertSpec {
                before: "                    ) : null}".to_string(),
            },
            section: SectionSpec {
                template: concat!(
                    "                    ) : activeSubTab === 'customer' ? (\n",
                    "                        <div className=\"flex flex-col gap-4\">\n",
                    "{{section}}\n",
                    "                        </div>\n",
                )
                .to_string(),
                fragment: true,
            },
        }
    }

    /// Parse a plan from TOML text
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::PlanParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the plan for a run: the given file, or the built-in default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = relo_fs::read_text(path)?;
                Self::from_toml(path, &text)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Compile the plan into a runnable relocation.
    ///
    /// Anchor compilation and template validation happen here, before
    /// any document is read or mutated.
    pub fn compile(&self) -> relo_core::Result<Relocation> {
        let removal = AnchorPattern::new(&self.remove.prefix, &self.remove.suffix, self.wildcard)?;
        let target = Anchor::new(&self.insert.before, self.wildcard)?;
        let template = if self.section.fragment {
            SectionTemplate::fragment(&self.section.template)?
        } else {
            SectionTemplate::new(&self.section.template)?
        };
        Ok(Relocation::new(removal, target, template))
    }
}
