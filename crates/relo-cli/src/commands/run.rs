//! Run command implementation
//!
//! Executes the relocation pipeline against a document and writes the
//! result back in place. Nothing is written when any stage fails or when
//! the run is a dry run.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use relo_core::{Document, DocumentDiff, Relocated};

use crate::error::Result;
use crate::plan::Plan;

/// Run the relocation against a document
pub fn run_relocate(
    document_path: &Path,
    plan_path: Option<&Path>,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    // Compile the plan before touching the document so configuration
    // errors surface with the file untouched
    let plan = Plan::load(plan_path)?;
    let relocation = plan.compile()?;

    let source = relo_fs::read_text(document_path)?;
    let document = Document::new(source);

    let outcome = relocation.apply(&document)?;

    if !dry_run {
        relo_fs::write_text(document_path, outcome.document.source())?;
    }

    if json_output {
        let diff = DocumentDiff::compute(document.source(), outcome.document.source());
        let report = json!({
            "document": document_path.display().to_string(),
            "dry_run": dry_run,
            "removed": outcome.removed,
            "inserted_at": outcome.inserted_at,
            "inserted_bytes": outcome.inserted.len(),
            "similarity": diff.similarity,
            "edits": outcome.edits,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(document_path, &plan, &outcome, dry_run);
    Ok(())
}

/// Human-readable multi-line summary naming each step performed
fn print_summary(path: &Path, plan: &Plan, outcome: &Relocated, dry_run: bool) {
    println!("{} Section relocation complete.", "OK".green().bold());

    match &outcome.removed {
        Some(section) => println!(
            "   {} Removed section at bytes {}..{} ({} bytes, sha256 {})",
            "1.".bold(),
            section.span.start,
            section.span.end,
            section.content.len(),
            &section.checksum()[..12],
        ),
        None => println!(
            "   {} Removal pattern not found; nothing to remove",
            "1.".bold()
        ),
    }

    println!(
        "   {} Rebuilt section from template ({} bytes)",
        "2.".bold(),
        outcome.inserted.len()
    );

    println!(
        "   {} Inserted before `{}` at byte {}",
        "3.".bold(),
        plan.insert.before.trim_start().cyan(),
        outcome.inserted_at
    );

    if dry_run {
        println!(
            "   {} Dry run; {} not modified",
            "4.".bold(),
            path.display().to_string().yellow()
        );
    } else {
        println!("   {} Wrote {}", "4.".bold(), path.display().to_string().cyan());
    }
}
