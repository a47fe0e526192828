//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use thiserror::Error;

use crate::advisor::AdvisorError;
use crate::rules::RuleError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("PAIR_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Rule file missing or malformed
    #[error("{0}")]
    Rules(#[from] RuleError),

    /// Thresholds given on the command line are out of range
    #[error("PAIR_THRESHOLD_INVALID: {0}")]
    Thresholds(#[from] AdvisorError),

    /// stdout/stderr failure
    #[error("PAIR_CLI_IO_ERROR: {0}")]
    Io(String),

    /// Runtime or listener could not start
    #[error("PAIR_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => "PAIR_CLI_CONFIG_ERROR",
            Self::Rules(e) => e.code().code(),
            Self::Thresholds(e) => e.code(),
            Self::Io(_) => "PAIR_CLI_IO_ERROR",
            Self::BootFailed(_) => "PAIR_CLI_BOOT_FAILED",
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
