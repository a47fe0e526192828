//! Threshold filtering
//!
//! Both bounds are inclusive and both must hold (AND semantics).

use crate::rules::Rule;

use super::thresholds::Thresholds;

/// Evaluates thresholds against rules
pub struct ThresholdFilter;

impl ThresholdFilter {
    /// Checks if a rule meets both thresholds
    pub fn matches(rule: &Rule, thresholds: &Thresholds) -> bool {
        Self::meets_success(rule, thresholds) && Self::meets_frequency(rule, thresholds)
    }

    /// Success rate at or above the minimum
    fn meets_success(rule: &Rule, thresholds: &Thresholds) -> bool {
        rule.success_rate() >= f64::from(thresholds.min_success)
    }

    /// Combination frequency at or above the minimum
    fn meets_frequency(rule: &Rule, thresholds: &Thresholds) -> bool {
        rule.combination_frequency() >= thresholds.min_frequency
    }

    /// Returns matching rules in input order
    pub fn apply<'a>(
        rules: impl IntoIterator<Item = &'a Rule>,
        thresholds: &Thresholds,
    ) -> Vec<Rule> {
        rules
            .into_iter()
            .filter(|rule| Self::matches(rule, thresholds))
            .cloned()
            .collect()
    }
}
