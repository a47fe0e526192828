//! Recommendation subsystem
//!
//! Turns the loaded rule set plus two slider values into the ordered list of
//! product pairings shown on the dashboard.
//!
//! # Pipeline (strict order)
//!
//! 1. Validate thresholds (success 1..=100, frequency 0.0..=5.0)
//! 2. Keep rules with success_rate >= min_success AND
//!    combination_frequency >= min_frequency
//! 3. Stable sort by success_rate, highest first
//! 4. Report an informational warning when nothing is left

mod advisor;
mod errors;
mod filters;
mod result;
mod sorter;
mod thresholds;

pub use advisor::Advisor;
pub use errors::{AdvisorError, AdvisorResult};
pub use filters::ThresholdFilter;
pub use result::{Recommendations, RecommendationsView, EMPTY_RESULT_WARNING};
pub use sorter::ResultSorter;
pub use thresholds::Thresholds;
