//! Numeric coercion for hinted columns.

use tracing::debug;

use crate::table::{CellValue, CleanedReport};

/// Parses a cell as a finite number. Empty, unparseable, and non-finite
/// values are None.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn is_hinted(column: &str, hints: &[String]) -> bool {
    let lower = column.to_lowercase();
    hints.iter().any(|hint| lower.contains(hint.as_str()))
}

/// Coerces every hinted column to numbers. Cells that do not parse become
/// [`CellValue::Missing`]; row survival and other columns are unaffected.
///
/// `hints` must already be lower-cased (rule compilation does this).
pub fn coerce_columns(report: &mut CleanedReport, hints: &[String]) {
    if hints.is_empty() {
        return;
    }
    let hinted: Vec<usize> = report
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| is_hinted(name, hints))
        .map(|(idx, _)| idx)
        .collect();
    if hinted.is_empty() {
        return;
    }

    for record in &mut report.records {
        for &idx in &hinted {
            if let Some(cell) = record.cells.get_mut(idx) {
                *cell = match cell.as_f64() {
                    Some(value) => CellValue::Number(value),
                    None => CellValue::Missing,
                };
            }
        }
    }
    debug!(columns = hinted.len(), "coerced hinted columns to numbers");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;

    fn hints() -> Vec<String> {
        vec!["days".into(), "current".into(), "total".into()]
    }

    fn sample_report() -> CleanedReport {
        CleanedReport {
            columns: vec!["Name".into(), "Days In Stock".into(), "Current".into()],
            records: vec![Record {
                sku: "SKU-1".into(),
                cells: vec![
                    CellValue::Text("Widget".into()),
                    CellValue::Text("N/A".into()),
                    CellValue::Text("5".into()),
                ],
            }],
        }
    }

    #[test]
    fn unparseable_cells_become_missing() {
        let mut report = sample_report();
        coerce_columns(&mut report, &hints());

        assert_eq!(report.records[0].cells[1], CellValue::Missing);
        assert_eq!(report.records[0].cells[2], CellValue::Number(5.0));
    }

    #[test]
    fn non_hinted_columns_are_untouched() {
        let mut report = sample_report();
        coerce_columns(&mut report, &hints());

        assert_eq!(report.records[0].cells[0], CellValue::Text("Widget".into()));
    }

    #[test]
    fn hint_matching_is_case_insensitive_substring() {
        let report = CleanedReport {
            columns: vec!["TOTAL".into(), "Average Days in Stock".into()],
            records: Vec::new(),
        };
        assert!(is_hinted(&report.columns[0], &hints()));
        assert!(is_hinted(&report.columns[1], &hints()));
        assert!(!is_hinted("Name", &hints()));
    }

    #[test]
    fn empty_hints_do_nothing() {
        let mut report = sample_report();
        coerce_columns(&mut report, &[]);

        assert_eq!(report.records[0].cells[1], CellValue::Text("N/A".into()));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(parse_number("5"), Some(5.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }
}
