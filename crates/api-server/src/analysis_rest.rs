//! Performance analysis REST endpoints: rule-based metric report, CSV
//! template download/import and the wizard catalogue.

use crate::rest::{ApiError, AppState, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use campaign_core::campaign::{goal_label, known_goals, known_platforms, platform_label};
use campaign_core::error::CampaignError;
use campaign_core::performance::{AnalysisReport, PerformanceAnalysisRequest};
use campaign_reporting::analyzer::MISSING_FIELDS_MESSAGE;
use campaign_reporting::csv_template::{self, ManualPerformanceData};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

const CSV_PARSE_ERROR: &str = "Failed to parse CSV. Please ensure it has a header and at least one data row matching the template format.";

/// POST /api/performance-analysis: Benchmark submitted campaign metrics.
#[utoipa::path(
    post,
    path = "/api/performance-analysis",
    tag = "Analysis",
    request_body = PerformanceAnalysisRequest,
    responses(
        (status = 200, description = "Analysis report", body = AnalysisReport),
        (status = 400, description = "Missing goal or metrics", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse),
    )
)]
pub async fn handle_performance_analysis(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    metrics::counter!("analysis.requests").increment(1);

    let request = match body {
        Ok(Json(value)) => serde_json::from_value::<PerformanceAnalysisRequest>(value),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected performance analysis body");
            metrics::counter!("analysis.validation_errors").increment(1);
            return Err(ErrorResponse::new(MISSING_FIELDS_MESSAGE)
                .with_details(rejection.body_text())
                .status(StatusCode::BAD_REQUEST));
        }
    };
    let request = request.map_err(|e| {
        metrics::counter!("analysis.validation_errors").increment(1);
        ErrorResponse::new(MISSING_FIELDS_MESSAGE)
            .with_details(e.to_string())
            .status(StatusCode::BAD_REQUEST)
    })?;

    match state.analyzer.analyze(&request) {
        Ok(report) => {
            metrics::counter!("analysis.metrics_evaluated").increment(report.analysis.len() as u64);
            Ok(Json(report))
        }
        Err(CampaignError::Validation(msg)) => {
            metrics::counter!("analysis.validation_errors").increment(1);
            Err(ErrorResponse::new(msg).status(StatusCode::BAD_REQUEST))
        }
        Err(e) => {
            error!(error = %e, "Performance analysis failed");
            Err(ErrorResponse::new("An unexpected error occurred.")
                .status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

/// GET /api/performance-template: Download the performance data CSV template.
#[utoipa::path(
    get,
    path = "/api/performance-template",
    tag = "Analysis",
    responses((status = 200, description = "CSV template", body = String, content_type = "text/csv"))
)]
pub async fn handle_performance_template() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"performance_template.csv\"",
            ),
        ],
        csv_template::template(),
    )
}

/// POST /api/performance-data/import: Parse the first row of an uploaded CSV.
#[utoipa::path(
    post,
    path = "/api/performance-data/import",
    tag = "Analysis",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Parsed performance data", body = ManualPerformanceData),
        (status = 400, description = "CSV did not match the template", body = ErrorResponse),
    )
)]
pub async fn handle_performance_import(
    body: String,
) -> Result<Json<ManualPerformanceData>, ApiError> {
    csv_template::parse_performance_csv(&body)
        .map(Json)
        .ok_or_else(|| ErrorResponse::new(CSV_PARSE_ERROR).status(StatusCode::BAD_REQUEST))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogEntry {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetricCatalogEntry {
    pub key: String,
    pub label: String,
    pub benchmark: String,
    pub unit: String,
}

/// Options offered by the wizard steps.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub goals: Vec<CatalogEntry>,
    pub platforms: Vec<CatalogEntry>,
    pub metrics: Vec<MetricCatalogEntry>,
}

/// GET /api/catalog: Goals, platforms and benchmarked metrics.
#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = "Analysis",
    responses((status = 200, description = "Wizard catalogue", body = CatalogResponse))
)]
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = state.analyzer.evaluator().catalog();
    let entry = |key: &str, label: String| CatalogEntry {
        key: key.to_string(),
        label,
    };

    Json(CatalogResponse {
        goals: known_goals().map(|g| entry(g, goal_label(g))).collect(),
        platforms: known_platforms().map(|p| entry(p, platform_label(p))).collect(),
        metrics: catalog
            .benchmarked_metrics()
            .into_iter()
            .filter_map(|key| {
                catalog.benchmark(key).map(|bench| MetricCatalogEntry {
                    key: key.to_string(),
                    label: catalog.label(key),
                    benchmark: bench.note.clone(),
                    unit: bench.unit().to_string(),
                })
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::performance::{MetricFlag, TrendLabel};
    use campaign_reporting::PerformanceAnalyzer;
    use serde_json::json;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(PerformanceAnalyzer::default()), "node-test".to_string())
    }

    async fn analyze(body: Value) -> Result<Json<AnalysisReport>, ApiError> {
        handle_performance_analysis(State(state()), Ok(Json(body))).await
    }

    #[tokio::test]
    async fn test_analysis_happy_path() {
        let Json(report) = analyze(json!({
            "goal": "sales_conversions",
            "platform": "facebook",
            "metrics": {"cvr": 5, "ctr": "bad", "roas": 3},
            "past_metrics": {"roas": 2}
        }))
        .await
        .unwrap();

        assert_eq!(report.analysis.len(), 2);
        assert_eq!(report.analysis[1].flag, MetricFlag::Good);
        assert_eq!(report.analysis[1].trend, Some(TrendLabel::Improved));
        assert_eq!(report.summary, "✅ 1 metric is beating benchmarks—opportunity to scale!");
    }

    #[tokio::test]
    async fn test_missing_goal_is_bad_request() {
        let (status, Json(body)) = analyze(json!({"metrics": {"cvr": 5}})).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn test_metrics_not_object_is_bad_request() {
        let (status, _) = analyze(json!({"goal": "engagement", "metrics": [5]})).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrongly_typed_goal_is_bad_request() {
        let (status, Json(body)) = analyze(json!({"goal": 7, "metrics": {}})).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_non_string_platform_is_echoed() {
        let Json(report) = analyze(json!({
            "goal": "engagement",
            "platform": 3,
            "metrics": {"cvr": 5}
        }))
        .await
        .unwrap();
        assert_eq!(report.platform, Some(json!(3)));
        assert_eq!(report.analysis.len(), 1);
    }

    #[tokio::test]
    async fn test_import_template_csv() {
        let Json(data) = handle_performance_import(csv_template::template()).await.unwrap();
        assert_eq!(data.clicks, Some(500.0));

        let (status, Json(body)) = handle_performance_import("date\n".to_string()).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, CSV_PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_catalog_lists_benchmarks() {
        let Json(catalog) = handle_catalog(State(state())).await;
        assert_eq!(catalog.goals.len(), 5);
        assert_eq!(catalog.platforms[0].label, "Facebook");
        let roas = catalog.metrics.iter().find(|m| m.key == "roas").unwrap();
        assert_eq!(roas.label, "Return on Ad Spend (x)");
        assert_eq!(roas.benchmark, "2x+");
        assert_eq!(roas.unit, "x");
        let ctr = catalog.metrics.iter().find(|m| m.key == "ctr").unwrap();
        assert_eq!(ctr.unit, "%");
    }
}
