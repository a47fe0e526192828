//! Observability for the pair advisor
//!
//! - Structured logging (one JSON object per line)
//! - Monotonic counters exposed at `/metrics`
//! - Typed lifecycle and request events
//!
//! Observability is read-only: it never changes what a request returns.
//!
//! # Usage
//!
//! ```ignore
//! use pair_advisor::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::RulesLoaded, &[("count", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_pages_rendered();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{LogSink, Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
