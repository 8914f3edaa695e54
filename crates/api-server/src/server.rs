//! API server: HTTP routes, middleware, Swagger UI and the metrics exporter.

use crate::rest::{self, AppState};
use crate::swagger::ApiDoc;
use crate::{analysis_rest, wizard_rest};
use axum::routing::{get, post};
use axum::Router;
use campaign_core::config::AppConfig;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Full application router with middleware and shared state applied.
    pub fn router(&self) -> Router {
        Router::new()
            // Performance analysis
            .route(
                "/api/performance-analysis",
                post(analysis_rest::handle_performance_analysis),
            )
            .route(
                "/api/performance-template",
                get(analysis_rest::handle_performance_template),
            )
            .route(
                "/api/performance-data/import",
                post(analysis_rest::handle_performance_import),
            )
            .route("/api/catalog", get(analysis_rest::handle_catalog))
            // Campaign wizard
            .route(
                "/api/generate-strategy",
                post(wizard_rest::handle_generate_strategy),
            )
            .route("/api/content-ideas", post(wizard_rest::handle_content_ideas))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the HTTP REST server.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = self.router();
        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the Prometheus exporter on a separate port. Must run inside the
    /// tokio runtime; the exporter spawns its own listener task.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");
        Ok(())
    }
}
