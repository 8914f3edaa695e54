//! Strategy agent: turns wizard input into per-platform marketing strategies.

use crate::completion::{CompletionClient, CompletionRequest};
use crate::prompts::strategy_prompt;
use campaign_core::config::GenerationConfig;
use campaign_core::error::{CampaignError, CampaignResult};
use campaign_core::wizard::{StrategyOutput, StrategyRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StrategyGenerator {
    client: Arc<dyn CompletionClient>,
    params: GenerationConfig,
}

impl StrategyGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, params: GenerationConfig) -> Self {
        Self { client, params }
    }

    pub async fn generate(&self, request: &StrategyRequest) -> CampaignResult<Vec<StrategyOutput>> {
        let violations = request.validate();
        if !violations.is_empty() {
            return Err(CampaignError::Validation(violations.join("; ")));
        }

        let prompt = strategy_prompt(request);
        debug!(prompt_len = prompt.len(), "Generated strategy prompt");
        metrics::counter!("ai.requests", "generator" => "strategy").increment(1);

        let raw = self
            .client
            .complete(&CompletionRequest::new(prompt, self.params))
            .await?;
        let strategies = parse_strategies(&raw)?;

        let expected = request.goals.len() * request.platforms.len();
        if strategies.is_empty() && expected > 0 {
            warn!(expected, "AI returned no strategies");
        }
        info!(
            provider = self.client.provider_name(),
            strategies = strategies.len(),
            expected,
            "Strategies generated"
        );
        Ok(strategies)
    }
}

/// Parse the `campaign_strategies` envelope. Items that do not match the
/// strategy shape are dropped; an array with items but no valid ones is an
/// error.
pub fn parse_strategies(raw: &str) -> CampaignResult<Vec<StrategyOutput>> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        CampaignError::AiResponse(format!("AI response was not valid JSON. Details: {e}"))
    })?;

    let items = match parsed.get("campaign_strategies") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(CampaignError::AiResponse(
                "AI response structure error: 'campaign_strategies' is not an array.".to_string(),
            ))
        }
        None => {
            return Err(CampaignError::AiResponse(
                "AI response JSON structure not recognized. Expected object with 'campaign_strategies'."
                    .to_string(),
            ))
        }
    };

    let strategies: Vec<StrategyOutput> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();

    if strategies.len() != items.len() {
        warn!(
            received = items.len(),
            kept = strategies.len(),
            "Dropped strategies that did not match the expected structure"
        );
    }
    if strategies.is_empty() && !items.is_empty() {
        return Err(CampaignError::AiResponse(
            "AI response's 'campaign_strategies' array contained items, but none matched the required strategy structure."
                .to_string(),
        ));
    }
    Ok(strategies)
}
