//! Filter thresholds controlled by the two sidebar sliders

use serde::{Deserialize, Serialize};

use super::errors::{AdvisorError, AdvisorResult};

/// Inclusive lower bounds applied to the derived rule metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum success rate, integer percent
    pub min_success: u32,
    /// Minimum combination frequency, percent
    pub min_frequency: f64,
}

impl Thresholds {
    pub const MIN_SUCCESS_LOWER: u32 = 1;
    pub const MIN_SUCCESS_UPPER: u32 = 100;
    pub const DEFAULT_MIN_SUCCESS: u32 = 40;

    pub const MIN_FREQUENCY_LOWER: f64 = 0.0;
    pub const MIN_FREQUENCY_UPPER: f64 = 5.0;
    pub const MIN_FREQUENCY_STEP: f64 = 0.1;
    pub const DEFAULT_MIN_FREQUENCY: f64 = 0.5;

    /// Creates validated thresholds
    pub fn new(min_success: u32, min_frequency: f64) -> AdvisorResult<Self> {
        let thresholds = Self {
            min_success,
            min_frequency,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks both bounds against the slider ranges
    pub fn validate(&self) -> AdvisorResult<()> {
        if !(Self::MIN_SUCCESS_LOWER..=Self::MIN_SUCCESS_UPPER).contains(&self.min_success) {
            return Err(AdvisorError::InvalidMinSuccess(self.min_success.to_string()));
        }
        if !(Self::MIN_FREQUENCY_LOWER..=Self::MIN_FREQUENCY_UPPER).contains(&self.min_frequency) {
            return Err(AdvisorError::InvalidMinFrequency(self.min_frequency.to_string()));
        }
        Ok(())
    }

    /// Parses raw control values, falling back to `defaults` for absent or
    /// blank ones.
    pub fn parse(
        min_success: Option<&str>,
        min_frequency: Option<&str>,
        defaults: Thresholds,
    ) -> AdvisorResult<Self> {
        let min_success = match min_success.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| AdvisorError::InvalidMinSuccess(raw.to_string()))?,
            None => defaults.min_success,
        };

        let min_frequency = match min_frequency.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let value = raw
                    .trim_end_matches('%')
                    .parse::<f64>()
                    .map_err(|_| AdvisorError::InvalidMinFrequency(raw.to_string()))?;
                if value.is_nan() {
                    return Err(AdvisorError::InvalidMinFrequency(raw.to_string()));
                }
                value
            }
            None => defaults.min_frequency,
        };

        Self::new(min_success, min_frequency)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_success: Self::DEFAULT_MIN_SUCCESS,
            min_frequency: Self::DEFAULT_MIN_FREQUENCY,
        }
    }
}
