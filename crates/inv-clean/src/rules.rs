//! The row-exclusion rule catalog.
//!
//! Two catalogs ship as presets: [`RuleSet::broad`] covers the
//! warehouse-wide export with a large literal prefix list, and
//! [`RuleSet::narrow`] replaces the numeric prefixes with a single leading
//! pattern and adds numeric coercion hints. A catalog can also be loaded
//! from JSON, so rule changes do not require a rebuild.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::{CleanError, Result};

/// Output quoting policy for the cleaned file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotingPolicy {
    /// Quote only fields containing the delimiter, a quote, or a newline.
    #[default]
    Minimal,
    /// Never quote; escape special characters with a literal backslash.
    EscapeBackslash,
}

/// Swappable cleaning configuration: exclusion rules plus output policy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSet {
    /// Keys removed on exact equality (category and subtotal labels).
    pub exact: Vec<String>,
    /// Keys removed when they start with any of these literals.
    pub prefixes: Vec<String>,
    /// Keys removed when they match this start-anchored pattern.
    pub leading_pattern: Option<String>,
    /// Columns whose lower-cased name contains one of these substrings are
    /// coerced to numbers.
    pub numeric_hints: Vec<String>,
    /// Quoting policy for the written file.
    pub quoting: QuotingPolicy,
}

impl RuleSet {
    /// The broad catalog: every known category label (trailing backslashes
    /// in the labels are literal characters from the vendor report, not
    /// escapes) and the full literal prefix list.
    pub fn broad() -> Self {
        Self {
            exact: vec![
                "Uncategorized".into(),
                "Inventory".into(),
                "Total Inventory".into(),
                "Total Uncategorized".into(),
                "TOTAL".into(),
                "Core Stock - ATL".into(),
                "Total Core Stock - ATL".into(),
                "Total Core Stock - ATL\\".into(),
                "Core Stock - ATL\\".into(),
                "Core Stock - ATL, AMS".into(),
                "Total Core Stock - ATL, AMS".into(),
            ],
            prefixes: vec![
                "14-".into(),
                "16-".into(),
                "20-".into(),
                "21-".into(),
                "70-".into(),
                "00-".into(),
                "14.".into(),
                "320-".into(),
                "IP15L".into(),
                "IP19L".into(),
                "OF15L".into(),
                "R15L".into(),
                "RM12L".into(),
                "W24L".into(),
                "VGL".into(),
                "Chrome-".into(),
                "Customs-".into(),
                "LGE-".into(),
                "BSBI-".into(),
                "Seneca-".into(),
                "BF".into(),
                "OptConnect-".into(),
                "BrightSign-".into(),
            ],
            leading_pattern: None,
            numeric_hints: Vec::new(),
            quoting: QuotingPolicy::Minimal,
        }
    }

    /// The narrow catalog: category labels only, a leading-digits pattern
    /// instead of the numeric prefix list, and numeric coercion hints.
    pub fn narrow() -> Self {
        Self {
            exact: vec![
                "Uncategorized".into(),
                "Inventory".into(),
                "Total Inventory".into(),
                "Total Uncategorized".into(),
                "TOTAL".into(),
            ],
            prefixes: vec![
                "BSBI-".into(),
                "Seneca-".into(),
                "BF".into(),
                "OptConnect-".into(),
            ],
            leading_pattern: Some("^(14|16|20|21|70)-".into()),
            numeric_hints: vec!["days".into(), "current".into(), "total".into()],
            quoting: QuotingPolicy::EscapeBackslash,
        }
    }

    /// Loads a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CleanError::RuleFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| CleanError::RuleFileFormat {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Compiles the catalog for row filtering. A bad leading pattern is a
    /// configuration error, not a per-row error.
    pub fn compile(&self) -> Result<CompiledRules> {
        let leading = match &self.leading_pattern {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| CleanError::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?),
            None => None,
        };
        Ok(CompiledRules {
            exact: self.exact.clone(),
            prefixes: self.prefixes.clone(),
            leading,
            numeric_hints: self
                .numeric_hints
                .iter()
                .map(|hint| hint.to_lowercase())
                .collect(),
            quoting: self.quoting,
        })
    }
}

/// A rule catalog with the leading pattern compiled, ready for filtering.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    exact: Vec<String>,
    prefixes: Vec<String>,
    leading: Option<Regex>,
    /// Lower-cased coercion hints.
    pub numeric_hints: Vec<String>,
    pub quoting: QuotingPolicy,
}

impl CompiledRules {
    /// True when any exclusion rule matches the raw key. Matching is
    /// case-sensitive and does not trim whitespace.
    pub fn matches(&self, key: &str) -> bool {
        if self.exact.iter().any(|label| label == key) {
            return true;
        }
        if self.prefixes.iter().any(|prefix| key.starts_with(prefix.as_str())) {
            return true;
        }
        if let Some(leading) = &self.leading {
            if leading.is_match(key) {
                return true;
            }
        }
        false
    }
}
