//! Shared REST state, error envelope and operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campaign_agents::{ContentIdeaGenerator, StrategyGenerator};
use campaign_reporting::PerformanceAnalyzer;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<PerformanceAnalyzer>,
    /// `None` when the AI service is not configured.
    pub strategies: Option<Arc<StrategyGenerator>>,
    pub content_ideas: Option<Arc<ContentIdeaGenerator>>,
    pub node_id: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(analyzer: Arc<PerformanceAnalyzer>, node_id: String) -> Self {
        Self {
            analyzer,
            strategies: None,
            content_ideas: None,
            node_id,
            start_time: Instant::now(),
        }
    }

    pub fn with_generators(
        mut self,
        strategies: Arc<StrategyGenerator>,
        content_ideas: Arc<ContentIdeaGenerator>,
    ) -> Self {
        self.strategies = Some(strategies);
        self.content_ideas = Some(content_ideas);
        self
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(self, status: StatusCode) -> ApiError {
        (status, Json(self))
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
    pub ai_configured: bool,
}

/// GET /health: Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        ai_configured: state.strategies.is_some(),
    })
}

/// GET /ready: Readiness check. The analysis engine has no external
/// dependencies, so the service is ready as soon as it is serving.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Operations",
    responses((status = 200, description = "Ready to accept traffic"))
)]
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /live: Liveness check.
#[utoipa::path(
    get,
    path = "/live",
    tag = "Operations",
    responses((status = 200, description = "Process is alive"))
)]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
