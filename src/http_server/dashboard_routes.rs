//! Dashboard HTTP Routes
//!
//! `GET /` renders the HTML dashboard; `GET /api/recommendations` returns
//! the same filtered rules as JSON. Both read thresholds from the query
//! string and fall back to the configured defaults.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::advisor::{Advisor, AdvisorError, Recommendations, RecommendationsView, Thresholds};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::render::{render_dashboard, render_error};

// ==================
// Shared State
// ==================

/// State shared by all dashboard handlers
pub struct DashboardState {
    pub advisor: Advisor,
    pub metrics: Arc<MetricsRegistry>,
    /// Slider positions used when the query string omits a value
    pub defaults: Thresholds,
}

impl DashboardState {
    pub fn new(advisor: Advisor, defaults: Thresholds) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        metrics.set_rules_loaded(advisor.rules().len() as u64);
        Self {
            advisor,
            metrics,
            defaults,
        }
    }

    /// Parses thresholds and runs the advisor, recording the outcome
    fn recommend(&self, query: &ThresholdQuery) -> Result<Recommendations, AdvisorError> {
        let thresholds = Thresholds::parse(
            query.min_success.as_deref(),
            query.min_frequency.as_deref(),
            self.defaults,
        )
        .map_err(|e| {
            self.metrics.increment_requests_rejected();
            log_event_with_fields(
                Event::ThresholdsRejected,
                &[("field", e.field()), ("reason", &e.to_string())],
            );
            e
        })?;

        let recs = self.advisor.recommend(thresholds);
        if recs.is_empty() {
            self.metrics.increment_empty_results();
            log_event_with_fields(
                Event::RecommendationsEmpty,
                &[
                    ("min_frequency", &thresholds.min_frequency.to_string()),
                    ("min_success", &thresholds.min_success.to_string()),
                ],
            );
        }
        Ok(recs)
    }
}

// ==================
// Request/Response Types
// ==================

/// Raw slider values; parsed by `Thresholds::parse` so bad input gets a
/// friendly error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ThresholdQuery {
    #[serde(default)]
    pub min_success: Option<String>,
    #[serde(default)]
    pub min_frequency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub field: String,
    pub message: String,
}

impl From<&AdvisorError> for ErrorResponse {
    fn from(e: &AdvisorError) -> Self {
        Self {
            code: e.code().to_string(),
            field: e.field().to_string(),
            message: e.to_string(),
        }
    }
}

fn status_of(e: &AdvisorError) -> StatusCode {
    StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
}

// ==================
// Router
// ==================

/// Create dashboard routes
pub fn dashboard_routes(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/api/recommendations", get(recommendations_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn dashboard_handler(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<ThresholdQuery>,
) -> Response {
    match state.recommend(&query) {
        Ok(recs) => {
            state.metrics.increment_pages_rendered();
            log_event_with_fields(
                Event::DashboardRendered,
                &[("count", &recs.len().to_string())],
            );
            Html(render_dashboard(&recs)).into_response()
        }
        Err(e) => (
            status_of(&e),
            Html(render_error(&state.defaults, &e.to_string())),
        )
            .into_response(),
    }
}

async fn recommendations_handler(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<ThresholdQuery>,
) -> Response {
    match state.recommend(&query) {
        Ok(recs) => {
            state.metrics.increment_api_requests();
            log_event_with_fields(
                Event::RecommendationsServed,
                &[("count", &recs.len().to_string())],
            );
            Json(RecommendationsView::from(&recs)).into_response()
        }
        Err(e) => (status_of(&e), Json(ErrorResponse::from(&e))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ItemSet, Rule, RuleSet};

    fn state() -> DashboardState {
        let rules = RuleSet::new(vec![
            Rule::new(ItemSet::new(["bread"]), ItemSet::new(["butter"]), 0.02, 0.55, 1.9),
            Rule::new(ItemSet::new(["tea"]), ItemSet::new(["milk"]), 0.001, 0.9, 2.4),
        ]);
        DashboardState::new(Advisor::new(rules), Thresholds::default())
    }

    #[test]
    fn test_state_records_rule_count() {
        assert_eq!(state().metrics.rules_loaded(), 2);
    }

    #[test]
    fn test_recommend_uses_defaults() {
        let recs = state().recommend(&ThresholdQuery::default()).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs.thresholds, Thresholds::default());
    }

    #[test]
    fn test_rejection_counted() {
        let s = state();
        let query = ThresholdQuery {
            min_success: Some("0".into()),
            min_frequency: None,
        };
        assert!(s.recommend(&query).is_err());
        assert_eq!(s.metrics.snapshot().requests_rejected, 1);
    }

    #[test]
    fn test_empty_result_counted() {
        let s = state();
        let query = ThresholdQuery {
            min_success: Some("100".into()),
            min_frequency: Some("0".into()),
        };
        assert!(s.recommend(&query).unwrap().is_empty());
        assert_eq!(s.metrics.snapshot().empty_results, 1);
    }

    #[test]
    fn test_error_response_body() {
        let e = AdvisorError::InvalidMinFrequency("9".into());
        let body = ErrorResponse::from(&e);
        assert_eq!(body.code, "PAIR_THRESHOLD_INVALID");
        assert_eq!(body.field, "min_frequency");
        assert_eq!(status_of(&e), StatusCode::BAD_REQUEST);
    }
}
