//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Relo - relocate a marked section ahead of a target anchor
#[derive(Parser, Debug)]
#[command(name = "relo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the relocation and write the document back in place
    ///
    /// The anchor patterns and the rebuilt section's template are the
    /// fixed constants of the run: the compiled-in default plan, or the
    /// plan file given with --plan. The document path only tells the
    /// tool where the text lives.
    Run {
        /// Document to edit in place
        document: PathBuf,

        /// TOML plan file overriding the built-in plan
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Preview the run without writing the document
        #[arg(long)]
        dry_run: bool,

        /// Output the run report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Preview the line diff a run would produce, never writing
    Diff {
        /// Document to preview against
        document: PathBuf,

        /// TOML plan file overriding the built-in plan
        #[arg(short, long)]
        plan: Option<PathBuf>,
    },
}
