//! Error types for relo-core

/// Result type for relo-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in relo-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Anchor `{marker}` contains no literal text to match")]
    EmptyAnchor { marker: String },

    #[error("Failed to compile anchor `{marker}`: {message}")]
    InvalidAnchor { marker: String, message: String },

    #[error("Malformed section template at byte {position}: {message}")]
    MalformedTemplate { position: usize, message: String },

    #[error("Insertion anchor not found: `{anchor}`")]
    TargetNotFound { anchor: String },
}

impl Error {
    pub fn invalid_anchor(marker: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAnchor {
            marker: marker.into(),
            message: message.into(),
        }
    }

    pub fn malformed_template(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            position,
            message: message.into(),
        }
    }
}
