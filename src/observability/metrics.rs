//! Metrics registry
//!
//! - Counters only, monotonic, reset on process start
//! - `rules_loaded` is set once at startup
//! - Relaxed atomics; exactness across threads is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the dashboard
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Rules held in memory
    rules_loaded: AtomicU64,
    /// HTML dashboard renders
    pages_rendered: AtomicU64,
    /// JSON recommendation responses
    api_requests: AtomicU64,
    /// Requests rejected for invalid thresholds
    requests_rejected: AtomicU64,
    /// Requests whose filters left no rules
    empty_results: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the size of the loaded rule set
    pub fn set_rules_loaded(&self, count: u64) {
        self.rules_loaded.store(count, Ordering::Relaxed);
    }

    pub fn increment_pages_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_api_requests(&self) {
        self.api_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_empty_results(&self) {
        self.empty_results.fetch_add(1, Ordering::Relaxed);
    }

    /// Rules held in memory
    pub fn rules_loaded(&self) -> u64 {
        self.rules_loaded.load(Ordering::Relaxed)
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            rules_loaded: self.rules_loaded.load(Ordering::Relaxed),
            pages_rendered: self.pages_rendered.load(Ordering::Relaxed),
            api_requests: self.api_requests.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub rules_loaded: u64,
    pub pages_rendered: u64,
    pub api_requests: u64,
    pub requests_rejected: u64,
    pub empty_results: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_registry_is_zero() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.pages_rendered, 0);
        assert_eq!(snapshot.rules_loaded, 0);
    }

    #[test]
    fn test_counters_increment() {
        let metrics = MetricsRegistry::new();
        metrics.set_rules_loaded(42);
        metrics.increment_pages_rendered();
        metrics.increment_pages_rendered();
        metrics.increment_api_requests();
        metrics.increment_requests_rejected();
        metrics.increment_empty_results();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                rules_loaded: 42,
                pages_rendered: 2,
                api_requests: 1,
                requests_rejected: 1,
                empty_results: 1,
            }
        );
    }

    #[test]
    fn test_concurrent_increments() {
        let metrics = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        m.increment_api_requests();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(metrics.snapshot().api_requests, 8000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(MetricsRegistry::new().snapshot()).unwrap();
        assert_eq!(json["empty_results"], 0);
    }
}
