//! # HTTP Server
//!
//! Combines the dashboard and observability routers into one axum app.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::advisor::{Advisor, Thresholds};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

use super::config::HttpServerConfig;
use super::dashboard_routes::{dashboard_routes, DashboardState};
use super::observability_routes::observability_routes;

/// HTTP server for the pair advisor dashboard
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<DashboardState>,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given advisor with default slider positions
    pub fn new(advisor: Advisor) -> Self {
        Self::with_config(HttpServerConfig::default(), advisor, Thresholds::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, advisor: Advisor, defaults: Thresholds) -> Self {
        let state = Arc::new(DashboardState::new(advisor, defaults));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<DashboardState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new().allow_origin(Any).allow_methods(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
        };

        Router::new()
            .merge(dashboard_routes(state.clone()))
            .merge(observability_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared counters, for callers that report on them
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.state.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let url = format!("http://{}", listener.local_addr()?);
        log_event_with_fields(
            Event::Serving,
            &[
                ("url", &url),
                ("rules", &self.state.advisor.rules().len().to_string()),
            ],
        );

        axum::serve(listener, self.router).await
    }
}
