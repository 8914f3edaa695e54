//! OpenAPI specification and Swagger UI configuration.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campaign Assistant API",
        version = "0.1.0",
        description = "Marketing campaign assistant.\n\nBenchmarks campaign performance metrics against industry ranges and generates AI-backed strategies and content ideas.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Analysis", description = "Performance analysis, CSV template and wizard catalogue"),
        (name = "Wizard", description = "AI strategy and content-idea generation"),
        (name = "Operations", description = "Health, readiness and liveness checks"),
    ),
    paths(
        // Analysis
        crate::analysis_rest::handle_performance_analysis,
        crate::analysis_rest::handle_performance_template,
        crate::analysis_rest::handle_performance_import,
        crate::analysis_rest::handle_catalog,
        // Wizard
        crate::wizard_rest::handle_generate_strategy,
        crate::wizard_rest::handle_content_ideas,
        // Operations
        crate::rest::health_check,
        crate::rest::readiness,
        crate::rest::liveness,
    ),
    components(schemas(
        // Performance analysis
        campaign_core::performance::PerformanceAnalysisRequest,
        campaign_core::performance::AnalysisReport,
        campaign_core::performance::MetricAnalysisResult,
        campaign_core::performance::MetricStatus,
        campaign_core::performance::MetricFlag,
        campaign_core::performance::TrendLabel,
        campaign_reporting::csv_template::ManualPerformanceData,
        crate::analysis_rest::CatalogResponse,
        crate::analysis_rest::CatalogEntry,
        crate::analysis_rest::MetricCatalogEntry,
        // Wizard
        campaign_core::wizard::Demographics,
        campaign_core::wizard::StrategyRequest,
        campaign_core::wizard::StrategyOutput,
        campaign_core::wizard::StrategyResponse,
        campaign_core::wizard::ContentIdeasRequest,
        campaign_core::wizard::ContentIdea,
        campaign_core::wizard::ContentIdeaBlock,
        campaign_core::wizard::ContentIdeasResponse,
        // REST error/health types
        crate::rest::ErrorResponse,
        crate::rest::HealthResponse,
    ))
)]
pub struct ApiDoc;
