//! Report reading: Windows-1252 decoding plus quoted CSV parsing.

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A raw inventory export: header row plus data rows, in file order.
///
/// The first column is the unnamed SKU column. Quote wrapping around fields
/// is already unwrapped by the CSV parser; stray literal quotes inside a
/// field survive and are stripped later during index normalization.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Reads a raw export into a [`ReportTable`].
///
/// The file is decoded as Windows-1252 before parsing. Ragged rows are a
/// parse error; there is no per-row recovery.
pub fn read_report(path: &Path) -> Result<ReportTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (text, _, had_errors) = WINDOWS_1252.decode(&bytes);
    if had_errors {
        return Err(IngestError::Decode {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(path = %path.display(), rows = rows.len(), "report loaded");
    Ok(ReportTable { headers, rows })
}
