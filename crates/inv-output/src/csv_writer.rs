//! Writing the cleaned report as UTF-8 CSV.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use inv_clean::{CleanedReport, QuotingPolicy};

use crate::error::{OutputError, Result};

/// Suffix appended to the input stem when naming the cleaned file.
pub const CLEANED_SUFFIX: &str = "_cleaned";

/// Derives `{output_dir}/{input_stem}_cleaned.csv`.
pub fn cleaned_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| OutputError::BadInputName {
            path: input.to_path_buf(),
        })?;
    Ok(output_dir.join(format!("{stem}{CLEANED_SUFFIX}.csv")))
}

/// Escapes delimiter, quote, newline, and backslash characters with a
/// leading backslash. The csv crate's own escape byte only applies inside
/// quoted fields, so the no-quoting policy escapes up front and writes
/// fields verbatim.
fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, ',' | '"' | '\n' | '\r' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn prepare(value: String, policy: QuotingPolicy) -> String {
    match policy {
        QuotingPolicy::Minimal => value,
        QuotingPolicy::EscapeBackslash => escape_field(&value),
    }
}

/// Writes the cleaned report to `{output_dir}/{input_stem}_cleaned.csv`,
/// creating the output directory if absent. Returns the written path.
pub fn write_cleaned(
    report: &CleanedReport,
    input: &Path,
    output_dir: &Path,
    quoting: QuotingPolicy,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let path = cleaned_path(input, output_dir)?;

    let quote_style = match quoting {
        QuotingPolicy::Minimal => QuoteStyle::Necessary,
        QuotingPolicy::EscapeBackslash => QuoteStyle::Never,
    };
    let mut writer = WriterBuilder::new()
        .quote_style(quote_style)
        .from_path(&path)
        .map_err(|e| OutputError::Write {
            path: path.clone(),
            source: e,
        })?;

    let mut header = Vec::with_capacity(report.columns.len() + 1);
    header.push(prepare("SKU".to_string(), quoting));
    for column in &report.columns {
        header.push(prepare(column.clone(), quoting));
    }
    writer.write_record(&header).map_err(|e| OutputError::Write {
        path: path.clone(),
        source: e,
    })?;

    for record in &report.records {
        let mut fields = Vec::with_capacity(report.columns.len() + 1);
        fields.push(prepare(record.sku.clone(), quoting));
        for cell in &record.cells {
            fields.push(prepare(cell.render(), quoting));
        }
        writer.write_record(&fields).map_err(|e| OutputError::Write {
            path: path.clone(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| OutputError::Flush {
        path: path.clone(),
        source: e,
    })?;
    info!(path = %path.display(), rows = report.record_count(), "cleaned report written");
    Ok(path)
}
