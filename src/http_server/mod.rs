//! # Pair Advisor HTTP Server Module
//!
//! Serves the dashboard over HTTP. Each slider change is a fresh GET that
//! re-runs filter, sort and render against the rules loaded at startup.
//!
//! # Endpoints
//!
//! - `/` - HTML dashboard (`?min_success=&min_frequency=`)
//! - `/api/recommendations` - same result as JSON
//! - `/health` - Health check
//! - `/metrics` - Counter snapshot

pub mod config;
pub mod dashboard_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use dashboard_routes::DashboardState;
pub use server::HttpServer;
