//! Campaign Assistant: campaign performance analysis and AI wizard service.
//!
//! Main entry point that initializes all subsystems and starts the server.

use campaign_agents::{AzureOpenAiClient, CompletionClient, ContentIdeaGenerator, StrategyGenerator};
use campaign_api::{ApiServer, AppState};
use campaign_core::config::AppConfig;
use campaign_reporting::{MetricCatalog, PerformanceAnalyzer};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-assistant")]
#[command(about = "Campaign performance analysis and AI strategy assistant")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "CAMPAIGN_ASSISTANT__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "CAMPAIGN_ASSISTANT__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Prometheus exporter port (overrides config)
    #[arg(long, env = "CAMPAIGN_ASSISTANT__METRICS__PORT")]
    metrics_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_assistant=info,campaign_api=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Campaign Assistant starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        ai_configured = config.ai.is_configured(),
        "Configuration loaded"
    );

    // Benchmark tables are immutable for the life of the process
    let catalog = Arc::new(MetricCatalog::industry_default());
    let analyzer = Arc::new(PerformanceAnalyzer::new(catalog));
    let mut state = AppState::new(analyzer, config.node_id.clone());

    match AzureOpenAiClient::from_config(&config.ai) {
        Ok(client) => {
            let client: Arc<dyn CompletionClient> = Arc::new(client);
            info!(
                provider = client.provider_name(),
                deployment = %config.ai.deployment,
                "AI completion client ready"
            );
            state = state.with_generators(
                Arc::new(StrategyGenerator::new(client.clone(), config.ai.strategy)),
                Arc::new(ContentIdeaGenerator::new(client, config.ai.content_ideas)),
            );
        }
        Err(e) => {
            warn!(error = %e, "AI generators disabled; wizard endpoints will return errors");
        }
    }

    let api_server = ApiServer::new(config.clone(), state);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Campaign Assistant is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
