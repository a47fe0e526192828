//! Rule loading error types
//!
//! Error codes:
//! - PAIR_DATA_NOT_FOUND (FATAL)
//! - PAIR_DATA_MALFORMED (FATAL)
//!
//! The dashboard cannot serve anything without its rule table, so every
//! loader error halts startup.

use std::fmt;

/// Severity levels for loader errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation failed but the process can continue
    Error,
    /// Process must halt
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Loader error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleErrorCode {
    /// Rule file does not exist or cannot be opened
    PairDataNotFound,
    /// Rule file exists but its contents cannot be used
    PairDataMalformed,
}

impl RuleErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            RuleErrorCode::PairDataNotFound => "PAIR_DATA_NOT_FOUND",
            RuleErrorCode::PairDataMalformed => "PAIR_DATA_MALFORMED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for RuleErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Loader error with file and line context
#[derive(Debug)]
pub struct RuleError {
    code: RuleErrorCode,
    message: String,
    /// 1-based line in the source file, header is line 1
    line: Option<u64>,
}

impl RuleError {
    /// Create a not-found error for the given path
    pub fn not_found(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: RuleErrorCode::PairDataNotFound,
            message: format!("Cannot open rule file '{}': {}", path.into(), reason.into()),
            line: None,
        }
    }

    /// Create a malformed-data error not tied to a specific row
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            code: RuleErrorCode::PairDataMalformed,
            message: reason.into(),
            line: None,
        }
    }

    /// Create a malformed-data error for a specific line
    pub fn malformed_at(line: u64, reason: impl Into<String>) -> Self {
        Self {
            code: RuleErrorCode::PairDataMalformed,
            message: reason.into(),
            line: Some(line),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> RuleErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending line, if known
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Returns whether this error must halt the process
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for RuleError {}

impl From<csv::Error> for RuleError {
    fn from(e: csv::Error) -> Self {
        match e.position() {
            Some(pos) => RuleError::malformed_at(pos.line(), format!("Unreadable CSV: {}", e)),
            None => RuleError::malformed(format!("Unreadable CSV: {}", e)),
        }
    }
}

/// Result type for rule loading
pub type RuleResult<T> = Result<T, RuleError>;
