//! Recommendation ordering
//!
//! Highest success rate first. The sort is stable, so rules with equal
//! success rates keep file order.

use std::cmp::Ordering;

use crate::rules::Rule;

/// Sorts filtered rules
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts rules by success rate, highest first
    pub fn sort(rules: &mut [Rule]) {
        rules.sort_by(|a, b| Self::compare(b.success_rate(), a.success_rate()));
    }

    fn compare(a: f64, b: f64) -> Ordering {
        a.total_cmp(&b)
    }
}
