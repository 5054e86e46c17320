//! Index normalization and SKU formatting.

use inv_ingest::ReportTable;
use tracing::debug;

use crate::table::{CellValue, CleanedReport, Record};

/// Removes literal double-quote characters. The CSV parser unwraps the
/// quote wrapping, but keys and headers occasionally carry stray quotes
/// from malformed wrapping in the export.
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Rebuilds the table around a quote-stripped SKU key column.
///
/// The key vector is built fresh instead of rewriting the identifier column
/// in place, so the keys and the remaining columns can never alias
/// mid-update. The identifier column itself is dropped from the fielded
/// data; the key is serialized under the "SKU" header later.
pub fn normalize_index(table: &ReportTable) -> CleanedReport {
    let columns: Vec<String> = table.headers.iter().skip(1).map(|h| strip_quotes(h)).collect();

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let raw_key = row.first().map(String::as_str).unwrap_or("");
        let mut cells = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            let value = row.get(idx + 1).map(String::as_str).unwrap_or("");
            cells.push(CellValue::Text(value.to_string()));
        }
        records.push(Record {
            sku: strip_quotes(raw_key),
            cells,
        });
    }

    debug!(rows = records.len(), columns = columns.len(), "SKU index set");
    CleanedReport { columns, records }
}

/// Drops the parenthetical annotation from a key: everything from the
/// first `" ("` onward is discarded.
pub fn trim_annotation(key: &str) -> String {
    match key.find(" (") {
        Some(pos) => key[..pos].to_string(),
        None => key.to_string(),
    }
}

/// Applies [`trim_annotation`] to every record key.
pub fn format_skus(report: &mut CleanedReport) {
    for record in &mut report.records {
        record.sku = trim_annotation(&record.sku);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ReportTable {
        ReportTable {
            headers: vec!["".into(), "\"Name\"".into(), "Total".into()],
            rows: vec![
                vec!["\"SKU-1\"".into(), "Widget".into(), "10".into()],
                vec!["SKU-2".into(), "Gadget".into(), "4".into()],
            ],
        }
    }

    #[test]
    fn drops_identifier_column_and_strips_quotes() {
        let report = normalize_index(&sample_table());

        assert_eq!(report.columns, vec!["Name", "Total"]);
        assert_eq!(report.records[0].sku, "SKU-1");
        assert_eq!(report.records[1].sku, "SKU-2");
        assert_eq!(
            report.records[0].cells,
            vec![
                CellValue::Text("Widget".into()),
                CellValue::Text("10".into())
            ]
        );
    }

    #[test]
    fn trims_annotation_at_first_open_paren() {
        assert_eq!(trim_annotation("SKU-ABC (used)"), "SKU-ABC");
        assert_eq!(trim_annotation("SKU-ABC (used) (x)"), "SKU-ABC");
        assert_eq!(trim_annotation("SKU-ABC"), "SKU-ABC");
        // Only the space-paren sequence triggers truncation.
        assert_eq!(trim_annotation("SKU(2)"), "SKU(2)");
    }

    #[test]
    fn formats_all_surviving_keys() {
        let mut report = normalize_index(&sample_table());
        report.records[0].sku = "SKU-1 (refurb)".into();

        format_skus(&mut report);
        assert_eq!(report.records[0].sku, "SKU-1");
        assert_eq!(report.records[1].sku, "SKU-2");
    }
}
