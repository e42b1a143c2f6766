//! Diff command implementation
//!
//! Previews the line changes a run would make without applying them.

use std::path::Path;

use colored::Colorize;

use relo_core::{Document, DocumentDiff, LineChange};

use crate::error::Result;
use crate::plan::Plan;

/// Run the diff command
pub fn run_diff(document_path: &Path, plan_path: Option<&Path>) -> Result<()> {
    let plan = Plan::load(plan_path)?;
    let relocation = plan.compile()?;

    let source = relo_fs::read_text(document_path)?;
    let document = Document::new(source);

    let outcome = relocation.apply(&document)?;
    let diff = DocumentDiff::compute(document.source(), outcome.document.source());

    if diff.is_equivalent {
        println!(
            "{} No changes. The run would leave the document as it is.",
            "OK".green().bold()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "Diff".blue().bold(),
        document_path.display().to_string().yellow()
    );
    println!();

    for change in &diff.changes {
        match change {
            LineChange::Added(line) => {
                let line = line.strip_suffix('\n').unwrap_or(line);
                println!("  {} {}", "+".green(), line.green());
            }
            LineChange::Removed(line) => {
                let line = line.strip_suffix('\n').unwrap_or(line);
                println!("  {} {}", "-".red(), line.red());
            }
        }
    }

    println!();
    println!("Similarity: {:.3}", diff.similarity);

    Ok(())
}
