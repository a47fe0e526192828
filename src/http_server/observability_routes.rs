//! Observability HTTP Routes
//!
//! Health check and counter snapshot.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::dashboard_routes::DashboardState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rules_loaded: u64,
}

/// Create observability routes
pub fn observability_routes(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules_loaded: state.metrics.rules_loaded(),
    };

    (StatusCode::OK, Json(response))
}

/// Metrics handler - returns counters as JSON
async fn metrics_handler(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics.snapshot()))
}
