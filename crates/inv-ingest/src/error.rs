//! Error types for report ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a raw inventory export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes are not valid under the export encoding.
    #[error("{path} is not valid Windows-1252 text")]
    Decode { path: PathBuf },

    /// Row structure is inconsistent or otherwise unparseable.
    #[error("failed to parse CSV {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File has no header row.
    #[error("report is empty: {path}")]
    Empty { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/exports/stock.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /exports/stock.csv");
    }
}
