//! Rule data subsystem
//!
//! Loads the precomputed association rules once at startup and derives the
//! two display percentages for every rule.
//!
//! # Data flow
//!
//! 1. Open the CSV file (missing file is FATAL)
//! 2. Locate required columns by header name
//! 3. Parse item sets and metrics, validating ranges (bad row is FATAL)
//! 4. Derive success rate and combination frequency
//! 5. Hand out an immutable `RuleSet`

mod errors;
mod items;
mod loader;
mod types;

pub use errors::{RuleError, RuleErrorCode, RuleResult, Severity};
pub use items::ItemSet;
pub use loader::{RuleLoader, DEFAULT_RULES_FILE, REQUIRED_COLUMNS};
pub use types::{round_to, DerivedMetrics, MetricRange, Rule, RuleSet, RuleSetSummary};
