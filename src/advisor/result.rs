//! Result types for the filter-and-sort pipeline

use serde::Serialize;

use crate::rules::Rule;

use super::thresholds::Thresholds;

/// Shown in place of cards and chart when nothing passes the filters
pub const EMPTY_RESULT_WARNING: &str =
    "No recommendations meet current criteria. Try lowering the filters in the sidebar.";

/// Filtered, ordered rules for one set of thresholds
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    /// Thresholds that produced this result
    pub thresholds: Thresholds,
    /// Rules in display order, highest success rate first
    pub rules: Vec<Rule>,
    /// Number of rules considered
    pub scanned_count: usize,
}

impl Recommendations {
    pub fn new(thresholds: Thresholds, rules: Vec<Rule>, scanned_count: usize) -> Self {
        Self {
            thresholds,
            rules,
            scanned_count,
        }
    }

    /// Returns true if no rule passed the filters
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of recommendations
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// The informational warning for an empty result, if any
    pub fn warning(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_RESULT_WARNING)
    }
}

/// JSON body for the recommendations API and the `recommend` command
#[derive(Debug, Serialize)]
pub struct RecommendationsView<'a> {
    pub thresholds: Thresholds,
    pub count: usize,
    pub scanned_count: usize,
    pub warning: Option<&'static str>,
    pub rules: &'a [Rule],
}

impl<'a> From<&'a Recommendations> for RecommendationsView<'a> {
    fn from(recs: &'a Recommendations) -> Self {
        Self {
            thresholds: recs.thresholds,
            count: recs.len(),
            scanned_count: recs.scanned_count,
            warning: recs.warning(),
            rules: &recs.rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_has_warning() {
        let recs = Recommendations::new(Thresholds::default(), Vec::new(), 12);
        assert!(recs.is_empty());
        assert_eq!(recs.warning(), Some(EMPTY_RESULT_WARNING));
    }

    #[test]
    fn test_view_serialization() {
        let recs = Recommendations::new(Thresholds::default(), Vec::new(), 3);
        let json = serde_json::to_value(RecommendationsView::from(&recs)).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["scanned_count"], 3);
        assert_eq!(json["thresholds"]["min_success"], 40);
        assert!(json["warning"].as_str().unwrap().starts_with("No recommendations"));
    }
}
