//! Relo CLI
//!
//! One-shot structural editor: cuts an anchor-bounded section out of a
//! document and splices its rebuilt form in ahead of a target anchor.

mod cli;
mod commands;
mod error;
mod plan;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run {
            document,
            plan,
            dry_run,
            json,
        }) => commands::run_relocate(&document, plan.as_deref(), dry_run, json),
        Some(Commands::Diff { document, plan }) => commands::run_diff(&document, plan.as_deref()),
        None => {
            println!("{} Section relocator", "relo".green().bold());
            println!();
            println!("Run {} for available commands.", "relo --help".cyan());
            Ok(())
        }
    }
}
