//! Advisor errors
//!
//! Error code: PAIR_THRESHOLD_INVALID (ERROR). A rejected request never
//! affects the loaded rules or later requests.

use thiserror::Error;

/// Result type for advisor operations
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Advisor errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvisorError {
    #[error("min_success must be an integer percent in 1..=100, got '{0}'")]
    InvalidMinSuccess(String),

    #[error("min_frequency must be a percent in 0.0..=5.0, got '{0}'")]
    InvalidMinFrequency(String),
}

impl AdvisorError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        "PAIR_THRESHOLD_INVALID"
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Name of the offending control
    pub fn field(&self) -> &'static str {
        match self {
            AdvisorError::InvalidMinSuccess(_) => "min_success",
            AdvisorError::InvalidMinFrequency(_) => "min_frequency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata() {
        let err = AdvisorError::InvalidMinSuccess("0".into());
        assert_eq!(err.code(), "PAIR_THRESHOLD_INVALID");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.field(), "min_success");
        assert!(err.to_string().contains("'0'"));
    }
}
