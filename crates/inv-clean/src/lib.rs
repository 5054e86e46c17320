//! Inventory cleaning domain.
//!
//! Takes a parsed export and produces a cleaned report: the SKU column
//! becomes the key, category and subtotal rows are removed by a swappable
//! rule catalog, parenthetical annotations are trimmed from keys, and
//! hinted columns can be coerced to numbers.

pub mod coerce;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod rules;
pub mod stats;
pub mod table;

pub use coerce::{coerce_columns, parse_number};
pub use error::{CleanError, Result};
pub use filter::{FilterOutcome, filter_rows};
pub use normalize::{format_skus, normalize_index, strip_quotes, trim_annotation};
pub use rules::{CompiledRules, QuotingPolicy, RuleSet};
pub use stats::{AVERAGE_DAYS_COLUMN, ReportStats, TOTAL_COLUMN, summarize};
pub use table::{CellValue, CleanedReport, Record};
