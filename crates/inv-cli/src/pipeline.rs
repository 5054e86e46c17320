//! The per-file cleaning pipeline with explicit stages.
//!
//! 1. **Ingest**: decode and parse the raw export
//! 2. **Clean**: normalize the SKU index, filter excluded rows, trim
//!    annotations, coerce hinted columns
//! 3. **Output**: write the cleaned CSV
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; a stage failure carries its stage tag to the caller. There is
//! no retry and no partial-output cleanup.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span};

use inv_clean::{
    CleanError, CleanedReport, CompiledRules, ReportStats, RuleSet, coerce_columns, filter_rows,
    format_skus, normalize_index, summarize,
};
use inv_ingest::{IngestError, ReportTable, read_report};
use inv_output::{OutputError, write_cleaned};

/// Error from a pipeline stage, tagged with the stage it came from.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("ingest: {0}")]
    Ingest(#[from] IngestError),
    #[error("clean: {0}")]
    Clean(#[from] CleanError),
    #[error("output: {0}")]
    Output(#[from] OutputError),
}

impl PipelineError {
    /// The pipeline stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Ingest(_) => "ingest",
            PipelineError::Clean(_) => "clean",
            PipelineError::Output(_) => "output",
        }
    }
}

/// Result type for pipeline runs.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Filename marker of a previously cleaned file; doubles as the
/// re-processing guard.
pub const CLEANED_MARKER: &str = "cleaned";

/// True when the input path names a file this tool already produced. The
/// check is by filename convention, not content inspection.
pub fn already_cleaned(input: &Path) -> bool {
    input.to_string_lossy().contains(CLEANED_MARKER)
}

/// Outcome of a full run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input path carried the cleaned marker; nothing was read or
    /// written.
    Skipped { input: PathBuf },
    /// The pipeline ran to completion.
    Cleaned(CleanOutcome),
}

/// Counts and paths from a completed pipeline run.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    /// Written file path; None on a dry run.
    pub output: Option<PathBuf>,
    pub input_rows: usize,
    pub removed_rows: usize,
    pub written_rows: usize,
    /// Summary statistics; Some when the catalog carries numeric hints.
    pub stats: Option<ReportStats>,
}

/// Runs the full pipeline for one export file.
pub fn run(
    input: &Path,
    output_dir: &Path,
    rules: &RuleSet,
    dry_run: bool,
) -> Result<RunOutcome> {
    info!(input = %input.display(), "starting to process file");
    if already_cleaned(input) {
        info!(input = %input.display(), "skipping already cleaned file");
        return Ok(RunOutcome::Skipped {
            input: input.to_path_buf(),
        });
    }
    let compiled = rules.compile()?;

    let ingest_span = info_span!("ingest", input = %input.display());
    let ingest_start = Instant::now();
    let table = ingest_span.in_scope(|| read_report(input))?;
    info!(
        rows = table.row_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let clean_span = info_span!("clean");
    let (report, removed_rows, stats) = clean_span.in_scope(|| clean(&table, &compiled));

    let output = if dry_run {
        info!("dry run, skipping write");
        None
    } else {
        let output_span = info_span!("output", output_dir = %output_dir.display());
        Some(output_span.in_scope(|| write_cleaned(&report, input, output_dir, compiled.quoting))?)
    };

    Ok(RunOutcome::Cleaned(CleanOutcome {
        input: input.to_path_buf(),
        output,
        input_rows: table.row_count(),
        removed_rows,
        written_rows: report.record_count(),
        stats,
    }))
}

/// Stage 2: normalize the index, filter rows, trim annotations, and, when
/// the catalog carries numeric hints, coerce and summarize.
pub fn clean(
    table: &ReportTable,
    rules: &CompiledRules,
) -> (CleanedReport, usize, Option<ReportStats>) {
    let normalized = normalize_index(table);
    let outcome = filter_rows(rules, normalized);
    let mut report = outcome.report;
    format_skus(&mut report);

    let stats = if rules.numeric_hints.is_empty() {
        None
    } else {
        coerce_columns(&mut report, &rules.numeric_hints);
        let stats = summarize(&report);
        info!(
            sku_count = stats.sku_count,
            total_sum = ?stats.total_sum,
            average_days_mean = ?stats.average_days_mean,
            "summary statistics"
        );
        Some(stats)
    };
    (report, outcome.removed, stats)
}
