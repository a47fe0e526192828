//! Dashboard HTTP Tests
//!
//! Drives the full router with `tower::ServiceExt::oneshot`:
//! - `/` renders cards and the chart, or the warning when nothing matches
//! - `/api/recommendations` returns the same result as JSON
//! - Invalid thresholds return 400 on both routes
//! - `/health` and `/metrics` report on the loaded rules

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use pair_advisor::advisor::{Advisor, Thresholds};
use pair_advisor::http_server::{HttpServer, HttpServerConfig};
use pair_advisor::rules::{ItemSet, Rule, RuleSet};

// =============================================================================
// Helper Functions
// =============================================================================

fn rules() -> RuleSet {
    RuleSet::new(vec![
        Rule::new(
            ItemSet::new(["bread", "butter"]),
            ItemSet::new(["jam"]),
            0.021,
            0.48,
            1.9,
        ),
        Rule::new(
            ItemSet::new(["fish & chips"]),
            ItemSet::new(["<vinegar>"]),
            0.034,
            0.73,
            2.6,
        ),
        Rule::new(ItemSet::new(["tea"]), ItemSet::new(["sugar"]), 0.002, 0.91, 3.1),
    ])
}

fn server() -> HttpServer {
    HttpServer::with_config(
        HttpServerConfig::default(),
        Advisor::new(rules()),
        Thresholds::default(),
    )
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

// =============================================================================
// Dashboard Page
// =============================================================================

/// Default sliders show the two qualifying pairings, best first.
#[tokio::test]
async fn test_dashboard_default_thresholds() {
    let (status, body) = get(server().router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Retail Product Pair Advisor"));
    assert!(body.contains("Showing 2 Product Pairings"));
    assert!(body.contains("Relationship Explorer"));
    assert!(body.contains("<svg"));
    assert_eq!(body.matches("<circle").count(), 2);

    let fish = body.find("fish &amp; chips").unwrap();
    let bread = body.find("bread, butter").unwrap();
    assert!(fish < bread, "higher success rate must come first");
}

/// Item names are escaped.
#[tokio::test]
async fn test_dashboard_escapes_items() {
    let (_, body) = get(server().router(), "/").await;

    assert!(body.contains("&lt;vinegar&gt;"));
    assert!(!body.contains("<vinegar>"));
}

/// Slider values from the query string drive the filter.
#[tokio::test]
async fn test_dashboard_query_thresholds() {
    let (status, body) = get(server().router(), "/?min_success=70&min_frequency=0.1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 2 Product Pairings"));
    assert!(body.contains("tea"));
    assert!(!body.contains("bread, butter"));
}

/// Nothing above the bar shows the warning and no chart.
#[tokio::test]
async fn test_dashboard_empty_result_warning() {
    let (status, body) = get(server().router(), "/?min_success=100").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 0 Product Pairings"));
    assert!(body.contains(
        "No recommendations meet current criteria. Try lowering the filters in the sidebar."
    ));
    assert!(!body.contains("Relationship Explorer"));
    assert!(!body.contains("<svg"));
}

/// Out-of-range slider values are rejected with an error page.
#[tokio::test]
async fn test_dashboard_rejects_invalid_threshold() {
    let (status, body) = get(server().router(), "/?min_frequency=9").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("Adjust Recommendations"));
}

// =============================================================================
// JSON API
// =============================================================================

/// JSON payload mirrors the dashboard.
#[tokio::test]
async fn test_api_recommendations() {
    let (status, json) = get_json(server().router(), "/api/recommendations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["scanned_count"], 3);
    assert_eq!(json["thresholds"]["min_success"], 40);
    assert_eq!(json["rules"][0]["success_rate"], 73.0);
    assert_eq!(json["rules"][0]["combination_frequency"], 3.4);
    assert_eq!(json["rules"][1]["antecedents"][1], "butter");
    assert!(json["warning"].is_null());
}

/// Empty result carries the warning text.
#[tokio::test]
async fn test_api_empty_result_warning() {
    let (status, json) = get_json(server().router(), "/api/recommendations?min_success=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert!(json["warning"].as_str().is_some());
}

/// Garbage thresholds return a coded 400.
#[tokio::test]
async fn test_api_rejects_garbage() {
    let (status, json) =
        get_json(server().router(), "/api/recommendations?min_success=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "PAIR_THRESHOLD_INVALID");
    assert_eq!(json["field"], "min_success");
}

// =============================================================================
// Observability
// =============================================================================

/// Health reports the loaded rule count.
#[tokio::test]
async fn test_health() {
    let (status, json) = get_json(server().router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["rules_loaded"], 3);
}

/// Counters track requests across the shared state.
#[tokio::test]
async fn test_metrics_counters() {
    let server = server();
    let metrics = server.metrics();
    let router = server.router();

    get(router.clone(), "/").await;
    get(router.clone(), "/?min_success=100").await;
    get(router.clone(), "/api/recommendations").await;
    get(router.clone(), "/api/recommendations?min_success=0").await;

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.pages_rendered, 2);
    assert_eq!(snapshot.api_requests, 1);
    assert_eq!(snapshot.empty_results, 1);
    assert_eq!(snapshot.requests_rejected, 1);

    let (_, json) = get_json(router, "/metrics").await;
    assert_eq!(json["pages_rendered"], 2);
    assert_eq!(json["rules_loaded"], 3);
}
