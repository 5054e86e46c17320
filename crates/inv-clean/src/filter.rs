//! Rule-based row filtering.

use tracing::info;

use crate::rules::CompiledRules;
use crate::table::CleanedReport;

/// Result of the row filter: surviving report plus the removed-row count.
#[derive(Debug)]
pub struct FilterOutcome {
    pub report: CleanedReport,
    pub removed: usize,
}

/// Retains records whose key matches no exclusion rule, preserving input
/// order. Keys are evaluated before annotation trimming.
pub fn filter_rows(rules: &CompiledRules, report: CleanedReport) -> FilterOutcome {
    let CleanedReport { columns, records } = report;
    let input = records.len();

    let mut kept = Vec::with_capacity(input);
    for record in records {
        if rules.matches(&record.sku) {
            continue;
        }
        kept.push(record);
    }

    let removed = input - kept.len();
    info!(input_rows = input, removed, "filtered category and excluded rows");
    FilterOutcome {
        report: CleanedReport {
            columns,
            records: kept,
        },
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use crate::table::{CellValue, Record};

    fn report_with_keys(keys: &[&str]) -> CleanedReport {
        CleanedReport {
            columns: vec!["Name".into()],
            records: keys
                .iter()
                .map(|key| Record {
                    sku: (*key).to_string(),
                    cells: vec![CellValue::Text("x".into())],
                })
                .collect(),
        }
    }

    #[test]
    fn removes_matching_rows_and_counts_them() {
        let rules = RuleSet::broad().compile().unwrap();
        let report = report_with_keys(&["TOTAL", "SKU-1", "14-0099", "SKU-2"]);

        let outcome = filter_rows(&rules, report);
        assert_eq!(outcome.removed, 2);
        let kept: Vec<&str> = outcome
            .report
            .records
            .iter()
            .map(|record| record.sku.as_str())
            .collect();
        assert_eq!(kept, vec!["SKU-1", "SKU-2"]);
    }

    #[test]
    fn preserves_order_of_survivors() {
        let rules = RuleSet::broad().compile().unwrap();
        let report = report_with_keys(&["Z-9", "Inventory", "A-1", "M-5"]);

        let outcome = filter_rows(&rules, report);
        let kept: Vec<&str> = outcome
            .report
            .records
            .iter()
            .map(|record| record.sku.as_str())
            .collect();
        assert_eq!(kept, vec!["Z-9", "A-1", "M-5"]);
    }

    #[test]
    fn keeps_everything_when_nothing_matches() {
        let rules = RuleSet::default().compile().unwrap();
        let report = report_with_keys(&["TOTAL", "SKU-1"]);

        let outcome = filter_rows(&rules, report);
        assert_eq!(outcome.removed, 0);
        assert_eq!(outcome.report.record_count(), 2);
    }
}
