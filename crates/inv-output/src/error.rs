//! Error types for output serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the cleaned file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input path has no file name to derive the output name from.
    #[error("input file has no usable name: {path}")]
    BadInputName { path: PathBuf },

    /// Failed to write the cleaned file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to flush the cleaned file to disk.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
