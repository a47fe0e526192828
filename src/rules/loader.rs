//! Rule loader for reading the precomputed rule table at startup
//!
//! The file is read once. A missing file, a missing column, or any row that
//! fails validation is FATAL: the dashboard never serves a partial table.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::errors::{RuleError, RuleResult};
use super::items::ItemSet;
use super::types::{Rule, RuleSet};

/// Column names the rule file must provide
pub const REQUIRED_COLUMNS: [&str; 5] = ["antecedents", "consequents", "support", "confidence", "lift"];

/// Default rule file name
pub const DEFAULT_RULES_FILE: &str = "associationRules.csv";

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    antecedents: usize,
    consequents: usize,
    support: usize,
    confidence: usize,
    lift: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> RuleResult<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            match position(name) {
                Some(idx) => *slot = idx,
                None => missing.push(name),
            }
        }
        if !missing.is_empty() {
            return Err(RuleError::malformed_at(
                1,
                format!("Missing required column(s): {}", missing.join(", ")),
            ));
        }

        let [antecedents, consequents, support, confidence, lift] = positions;
        Ok(Self {
            antecedents,
            consequents,
            support,
            confidence,
            lift,
        })
    }
}

/// Loads rules from a CSV file on disk.
pub struct RuleLoader {
    path: PathBuf,
}

impl RuleLoader {
    /// Creates a loader for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates every rule in the file.
    pub fn load(&self) -> RuleResult<RuleSet> {
        let file = File::open(&self.path)
            .map_err(|e| RuleError::not_found(self.path.display().to_string(), e.to_string()))?;
        Self::load_from_reader(file)
    }

    /// Reads rules from any CSV source.
    pub fn load_from_reader<R: Read>(reader: R) -> RuleResult<RuleSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut rules = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            rules.push(Self::parse_record(&record, columns, line)?);
        }

        Ok(RuleSet::new(rules))
    }

    fn parse_record(record: &csv::StringRecord, columns: ColumnIndex, line: u64) -> RuleResult<Rule> {
        let antecedents = Self::parse_items(record, columns.antecedents, "antecedents", line)?;
        let consequents = Self::parse_items(record, columns.consequents, "consequents", line)?;
        let support = Self::parse_number(record, columns.support, "support", line)?;
        let confidence = Self::parse_number(record, columns.confidence, "confidence", line)?;
        let lift = Self::parse_number(record, columns.lift, "lift", line)?;

        for (name, value) in [("support", support), ("confidence", confidence)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RuleError::malformed_at(
                    line,
                    format!("{} must be a fraction in [0, 1], got {}", name, value),
                ));
            }
        }

        if lift <= 0.0 {
            return Err(RuleError::malformed_at(
                line,
                format!("lift must be positive, got {}", lift),
            ));
        }

        Ok(Rule::new(antecedents, consequents, support, confidence, lift))
    }

    fn field<'r>(record: &'r csv::StringRecord, idx: usize, name: &str, line: u64) -> RuleResult<&'r str> {
        record
            .get(idx)
            .ok_or_else(|| RuleError::malformed_at(line, format!("Missing value for '{}'", name)))
    }

    fn parse_items(record: &csv::StringRecord, idx: usize, name: &str, line: u64) -> RuleResult<ItemSet> {
        let items = ItemSet::parse(Self::field(record, idx, name, line)?);
        if items.is_empty() {
            return Err(RuleError::malformed_at(line, format!("{} item set is empty", name)));
        }
        Ok(items)
    }

    fn parse_number(record: &csv::StringRecord, idx: usize, name: &str, line: u64) -> RuleResult<f64> {
        let raw = Self::field(record, idx, name, line)?;
        let value: f64 = raw
            .parse()
            .map_err(|_| RuleError::malformed_at(line, format!("{} is not a number: '{}'", name, raw)))?;
        if !value.is_finite() {
            return Err(RuleError::malformed_at(line, format!("{} is not finite: '{}'", name, raw)));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleErrorCode;

    const MLXTEND_CSV: &str = "\
antecedents,consequents,antecedent support,consequent support,support,confidence,lift,leverage,conviction
\"frozenset({'yogurt'})\",\"frozenset({'whole milk'})\",0.139,0.255,0.056,0.4016,1.571,0.020,1.244
\"frozenset({'rolls/buns', 'soda'})\",\"frozenset({'other vegetables'})\",0.038,0.193,0.0088,0.2305,1.191,0.0014,1.048
";

    #[test]
    fn test_load_mlxtend_export() {
        let set = RuleLoader::load_from_reader(MLXTEND_CSV.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);

        let first = &set.rules()[0];
        assert_eq!(first.antecedents.items(), ["yogurt"]);
        assert_eq!(first.consequents.items(), ["whole milk"]);
        assert_eq!(first.success_rate(), 40.2);
        assert_eq!(first.combination_frequency(), 5.6);

        let second = &set.rules()[1];
        assert_eq!(second.antecedents.items(), ["rolls/buns", "soda"]);
        assert_eq!(second.combination_frequency(), 0.88);
    }

    #[test]
    fn test_column_order_and_whitespace_free() {
        let csv = " lift , confidence ,support, consequents ,antecedents\n2.0, 0.5 ,0.1, b , a\n";
        let set = RuleLoader::load_from_reader(csv.as_bytes()).unwrap();
        let rule = &set.rules()[0];
        assert_eq!(rule.antecedents.to_string(), "a");
        assert_eq!(rule.lift, 2.0);
    }

    #[test]
    fn test_every_column_mapped_to_its_own_position() {
        let csv = "support,extra,antecedents,lift,consequents,confidence\n0.1,z,a,2.0,b,0.5\n";
        let set = RuleLoader::load_from_reader(csv.as_bytes()).unwrap();
        let rule = &set.rules()[0];
        assert_eq!(rule.antecedents.to_string(), "a");
        assert_eq!(rule.consequents.to_string(), "b");
        assert_eq!(rule.support, 0.1);
        assert_eq!(rule.confidence, 0.5);
        assert_eq!(rule.lift, 2.0);
    }

    #[test]
    fn test_all_missing_columns_reported() {
        let csv = "antecedents,lift,support\na,1.0,0.1\n";
        let err = RuleLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.message().contains("consequents, confidence"));
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_header_only_is_empty_set() {
        let csv = "antecedents,consequents,support,confidence,lift\n";
        let set = RuleLoader::load_from_reader(csv.as_bytes()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_column_rejected() {
        let csv = "antecedents,consequents,support,lift\na,b,0.1,1.0\n";
        let err = RuleLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.code(), RuleErrorCode::PairDataMalformed);
        assert!(err.message().contains("confidence"));
    }

    #[test]
    fn test_non_numeric_metric_rejected_with_line() {
        let csv = "antecedents,consequents,support,confidence,lift\na,b,0.1,0.5,1.0\nc,d,abc,0.5,1.0\n";
        let err = RuleLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.message().contains("support"));
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        let csv = "antecedents,consequents,support,confidence,lift\na,b,0.1,1.5,1.0\n";
        let err = RuleLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.message().contains("confidence"));
    }

    #[test]
    fn test_non_positive_lift_rejected() {
        let csv = "antecedents,consequents,support,confidence,lift\na,b,0.1,0.5,0\n";
        let err = RuleLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.message().contains("lift"));
    }

    #[test]
    fn test_empty_item_set_rejected() {
        let csv = "antecedents,consequents,support,confidence,lift\nfrozenset(),b,0.1,0.5,1.0\n";
        let err = RuleLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.message().contains("antecedents"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let loader = RuleLoader::new("/definitely/not/here/associationRules.csv");
        let err = loader.load().unwrap_err();
        assert_eq!(err.code(), RuleErrorCode::PairDataNotFound);
        assert!(err.is_fatal());
    }
}
