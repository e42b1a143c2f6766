//! Error types for relo-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from relo-core
    #[error(transparent)]
    Core(#[from] relo_core::Error),

    /// Error from relo-fs
    #[error(transparent)]
    Fs(#[from] relo_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Plan file could not be parsed
    #[error("Failed to parse plan {path}: {message}")]
    PlanParse { path: PathBuf, message: String },
}
