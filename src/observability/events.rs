//! Observable events for the pair advisor
//!
//! Events are explicit and typed; the string form is what appears in the
//! `event` field of each log line.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved from file and flags
    ConfigLoaded,
    /// Rule file read and validated
    RulesLoaded,
    /// Rule file missing or malformed (FATAL)
    RulesLoadFailed,
    /// HTTP listener bound, ready for requests
    Serving,
    /// HTTP server stopped with an error
    ServerFailed,

    // Requests
    /// Dashboard page rendered
    DashboardRendered,
    /// Recommendations returned as JSON
    RecommendationsServed,
    /// Filters left no rules; warning shown
    RecommendationsEmpty,
    /// Thresholds rejected
    ThresholdsRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "PAIR_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RulesLoaded => "RULES_LOADED",
            Event::RulesLoadFailed => "RULES_LOAD_FAILED",
            Event::Serving => "PAIR_SERVING",
            Event::ServerFailed => "SERVER_FAILED",

            Event::DashboardRendered => "DASHBOARD_RENDERED",
            Event::RecommendationsServed => "RECOMMENDATIONS_SERVED",
            Event::RecommendationsEmpty => "RECOMMENDATIONS_EMPTY",
            Event::ThresholdsRejected => "THRESHOLDS_REJECTED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RulesLoadFailed | Event::ServerFailed)
    }

    /// Returns true if this event reports a non-fatal problem
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::RecommendationsEmpty | Event::ThresholdsRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::RulesLoaded,
            Event::RulesLoadFailed,
            Event::Serving,
            Event::ServerFailed,
            Event::DashboardRendered,
            Event::RecommendationsServed,
            Event::RecommendationsEmpty,
            Event::ThresholdsRejected,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::RulesLoadFailed.is_fatal());
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::RulesLoaded.is_fatal());
        assert!(!Event::RecommendationsEmpty.is_fatal());
    }

    #[test]
    fn test_empty_result_is_warning_not_fatal() {
        assert!(Event::RecommendationsEmpty.is_warning());
        assert!(!Event::DashboardRendered.is_warning());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::RulesLoaded), "RULES_LOADED");
    }
}
