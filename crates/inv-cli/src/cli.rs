//! CLI argument definitions for the inventory cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inv-cleaner",
    version,
    about = "Clean vendor inventory CSV exports",
    long_about = "Clean a vendor-exported inventory CSV report.\n\n\
                  Reads a Windows-1252, fully quoted export, removes category and\n\
                  subtotal rows plus excluded SKU ranges, normalizes SKU keys, and\n\
                  writes a UTF-8 cleaned copy into the output folder."
)]
pub struct Cli {
    /// Path to the raw inventory export.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Folder that receives `<input>_cleaned.csv`.
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output_folder: PathBuf,

    /// Rule catalog preset to apply.
    #[arg(long = "variant", value_enum, default_value = "broad")]
    pub variant: VariantArg,

    /// Load the rule catalog from a JSON file instead of a preset.
    #[arg(long = "rules", value_name = "PATH", conflicts_with = "variant")]
    pub rules: Option<PathBuf>,

    /// Run the pipeline and report counts without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Also append logs to this file, in addition to the terminal.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Rule catalog presets.
#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    /// Full category list and literal SKU prefix exclusions; minimal
    /// output quoting.
    Broad,
    /// Category labels plus a leading-digits pattern; numeric coercion and
    /// backslash-escaped output.
    Narrow,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
