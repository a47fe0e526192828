//! Structured JSON logger
//!
//! - One log line = one JSON object = one event
//! - Keys: `event`, `severity`, `ts` (RFC 3339, UTC), then caller fields
//!   in alphabetical order
//! - INFO/WARN go to stdout, ERROR/FATAL to stderr, unless the sink is
//!   switched to `LogSink::Stderr` (one-shot commands own stdout)
//! - Synchronous, one write per line

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn to_stderr(self, sink: LogSink) -> bool {
        sink == LogSink::Stderr || self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed leading keys of every line; caller fields are appended after.
#[derive(Serialize)]
struct Header<'a> {
    event: &'a str,
    severity: Severity,
    ts: String,
}

/// Destination for INFO and WARN lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// INFO/WARN to stdout, ERROR/FATAL to stderr
    Split,
    /// Every line to stderr
    Stderr,
}

static STDERR_ONLY: AtomicBool = AtomicBool::new(false);

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Select the process-wide sink
    pub fn set_sink(sink: LogSink) {
        STDERR_ONLY.store(sink == LogSink::Stderr, Ordering::Relaxed);
    }

    /// Current process-wide sink
    pub fn sink() -> LogSink {
        if STDERR_ONLY.load(Ordering::Relaxed) {
            LogSink::Stderr
        } else {
            LogSink::Split
        }
    }

    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity.to_stderr(Self::sink()) {
            Self::log_stderr(severity, event, fields);
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    /// Log to stderr regardless of severity
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = Self::format_line(severity, event, fields, ts);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Builds one newline-terminated JSON line
    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)], ts: String) -> String {
        let header = Header { event, severity, ts };
        let mut line = serde_json::to_string(&header).unwrap_or_else(|_| {
            format!(r#"{{"event":"{}","severity":"{}"}}"#, event.escape_default(), severity)
        });

        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        // Reopen the header object and append the sorted caller fields
        line.pop();
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&serde_json::Value::from(*key).to_string());
            line.push(':');
            line.push_str(&serde_json::Value::from(*value).to_string());
        }
        line.push('}');
        line.push('\n');
        line
    }
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
