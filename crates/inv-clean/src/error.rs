//! Error types for cleaning configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a rule catalog.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Failed to read a rule catalog file.
    #[error("failed to read rule file {path}: {source}")]
    RuleFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule catalog file is not valid JSON for a rule set.
    #[error("invalid rule file {path}: {source}")]
    RuleFileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The leading pattern does not compile.
    #[error("invalid leading pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
