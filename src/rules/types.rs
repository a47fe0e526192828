//! Rule types and derived display metrics

use serde::Serialize;

use super::items::ItemSet;

/// Rounds to a fixed number of decimal places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Display-friendly percentages computed from raw rule metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Confidence as a percentage, one decimal
    pub success_rate: f64,
    /// Support as a percentage, three decimals
    pub combination_frequency: f64,
}

impl DerivedMetrics {
    /// Decimals kept for the success rate
    pub const SUCCESS_RATE_DECIMALS: i32 = 1;
    /// Decimals kept for the combination frequency
    pub const FREQUENCY_DECIMALS: i32 = 3;

    /// Derives both percentages from fractional support and confidence
    pub fn derive(support: f64, confidence: f64) -> Self {
        Self {
            success_rate: round_to(confidence * 100.0, Self::SUCCESS_RATE_DECIMALS),
            combination_frequency: round_to(support * 100.0, Self::FREQUENCY_DECIMALS),
        }
    }
}

/// A single precomputed association rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Items that, if purchased, predict the consequent
    pub antecedents: ItemSet,
    /// Items predicted to be purchased alongside the antecedents
    pub consequents: ItemSet,
    /// Fraction of transactions containing both item sets
    pub support: f64,
    /// Probability of the consequents given the antecedents
    pub confidence: f64,
    /// Observed over expected co-occurrence
    pub lift: f64,
    /// Percentages derived once at load time
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl Rule {
    /// Creates a rule and derives its display metrics
    pub fn new(
        antecedents: ItemSet,
        consequents: ItemSet,
        support: f64,
        confidence: f64,
        lift: f64,
    ) -> Self {
        Self {
            antecedents,
            consequents,
            support,
            confidence,
            lift,
            metrics: DerivedMetrics::derive(support, confidence),
        }
    }

    /// Confidence as a rounded percentage
    pub fn success_rate(&self) -> f64 {
        self.metrics.success_rate
    }

    /// Support as a rounded percentage
    pub fn combination_frequency(&self) -> f64 {
        self.metrics.combination_frequency
    }
}

/// Min/max of a metric over a rule set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    /// Computes the range of the values, or None if there are none
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, v| match range {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Immutable, file-ordered collection of loaded rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Wraps rules in file order
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Summary used by the `check` command and the health endpoint
    pub fn summary(&self) -> RuleSetSummary {
        RuleSetSummary {
            rule_count: self.len(),
            success_rate: MetricRange::of(self.iter().map(Rule::success_rate)),
            combination_frequency: MetricRange::of(
                self.iter().map(Rule::combination_frequency),
            ),
            lift: MetricRange::of(self.iter().map(|r| r.lift)),
        }
    }
}

/// Counts and metric ranges of a loaded rule set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSetSummary {
    pub rule_count: usize,
    pub success_rate: Option<MetricRange>,
    pub combination_frequency: Option<MetricRange>,
    pub lift: Option<MetricRange>,
}
