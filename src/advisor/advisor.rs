//! Recommendation pipeline over a loaded rule set

use std::sync::Arc;

use crate::rules::RuleSet;

use super::filters::ThresholdFilter;
use super::result::Recommendations;
use super::sorter::ResultSorter;
use super::thresholds::Thresholds;

/// Runs filter-then-sort against an immutable rule set.
///
/// Cheap to clone; the rule set is shared.
#[derive(Debug, Clone)]
pub struct Advisor {
    rules: Arc<RuleSet>,
}

impl Advisor {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns the full rule set
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Filters by both thresholds and orders by success rate, highest first.
    ///
    /// Thresholds are assumed validated; an empty result is not an error.
    pub fn recommend(&self, thresholds: Thresholds) -> Recommendations {
        let mut matched = ThresholdFilter::apply(self.rules.iter(), &thresholds);
        ResultSorter::sort(&mut matched);
        Recommendations::new(thresholds, matched, self.rules.len())
    }
}
