//! Post-clean summary statistics.

use crate::table::CleanedReport;

/// Column summed for the run summary, when present.
pub const TOTAL_COLUMN: &str = "TOTAL";

/// Column averaged for the run summary, when present.
pub const AVERAGE_DAYS_COLUMN: &str = "Average Days in Stock";

/// Summary numbers reported after cleaning. The optional fields are None
/// when the report does not carry the corresponding column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStats {
    pub sku_count: usize,
    pub total_sum: Option<f64>,
    pub average_days_mean: Option<f64>,
}

fn column_values(report: &CleanedReport, name: &str) -> Option<Vec<f64>> {
    let idx = report.column_index(name)?;
    Some(
        report
            .records
            .iter()
            .filter_map(|record| record.cells.get(idx).and_then(|cell| cell.as_f64()))
            .collect(),
    )
}

/// Computes the run summary over a cleaned report. Missing cells are
/// skipped; a column with no numeric cells has no mean.
pub fn summarize(report: &CleanedReport) -> ReportStats {
    let total_sum = column_values(report, TOTAL_COLUMN).map(|values| values.iter().sum());
    let average_days_mean = column_values(report, AVERAGE_DAYS_COLUMN).and_then(|values| {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    });
    ReportStats {
        sku_count: report.record_count(),
        total_sum,
        average_days_mean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Record};

    fn report(columns: Vec<&str>, rows: Vec<Vec<CellValue>>) -> CleanedReport {
        CleanedReport {
            columns: columns.into_iter().map(str::to_string).collect(),
            records: rows
                .into_iter()
                .enumerate()
                .map(|(idx, cells)| Record {
                    sku: format!("SKU-{idx}"),
                    cells,
                })
                .collect(),
        }
    }

    #[test]
    fn sums_total_and_averages_days() {
        let report = report(
            vec!["TOTAL", "Average Days in Stock"],
            vec![
                vec![CellValue::Number(10.0), CellValue::Number(4.0)],
                vec![CellValue::Number(5.0), CellValue::Number(8.0)],
            ],
        );

        let stats = summarize(&report);
        assert_eq!(stats.sku_count, 2);
        assert_eq!(stats.total_sum, Some(15.0));
        assert_eq!(stats.average_days_mean, Some(6.0));
    }

    #[test]
    fn missing_columns_are_skipped() {
        let report = report(vec!["Name"], vec![vec![CellValue::Text("x".into())]]);

        let stats = summarize(&report);
        assert_eq!(stats.sku_count, 1);
        assert_eq!(stats.total_sum, None);
        assert_eq!(stats.average_days_mean, None);
    }

    #[test]
    fn missing_cells_do_not_poison_the_mean() {
        let report = report(
            vec!["Average Days in Stock"],
            vec![
                vec![CellValue::Number(4.0)],
                vec![CellValue::Missing],
                vec![CellValue::Number(8.0)],
            ],
        );

        let stats = summarize(&report);
        assert_eq!(stats.average_days_mean, Some(6.0));
    }

    #[test]
    fn all_missing_total_sums_to_zero() {
        let report = report(vec!["TOTAL"], vec![vec![CellValue::Missing]]);

        let stats = summarize(&report);
        assert_eq!(stats.total_sum, Some(0.0));
        assert_eq!(stats.average_days_mean, None);
    }
}
