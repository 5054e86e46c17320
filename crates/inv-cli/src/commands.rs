//! Command execution: rule selection plus the pipeline run.

use anyhow::{Context, Result};
use tracing::error;

use inv_cli::pipeline::{self, RunOutcome};
use inv_clean::RuleSet;

use crate::cli::{Cli, VariantArg};

pub fn run_clean(cli: &Cli) -> Result<RunOutcome> {
    let rules = match &cli.rules {
        Some(path) => RuleSet::from_json_file(path)
            .with_context(|| format!("load rules from {}", path.display()))?,
        None => match cli.variant {
            VariantArg::Broad => RuleSet::broad(),
            VariantArg::Narrow => RuleSet::narrow(),
        },
    };

    let outcome = pipeline::run(&cli.input_file, &cli.output_folder, &rules, cli.dry_run)
        .map_err(|e| {
            error!(stage = e.stage(), error = %e, "processing failed");
            e
        })?;
    Ok(outcome)
}
