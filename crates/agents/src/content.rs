//! Content-idea agent: headlines, captions and CTAs per platform/goal.

use crate::completion::{CompletionClient, CompletionRequest};
use crate::prompts::content_ideas_prompt;
use campaign_core::config::GenerationConfig;
use campaign_core::error::{CampaignError, CampaignResult};
use campaign_core::wizard::{ContentIdeaBlock, ContentIdeasRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ContentIdeaGenerator {
    client: Arc<dyn CompletionClient>,
    params: GenerationConfig,
}

impl ContentIdeaGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, params: GenerationConfig) -> Self {
        Self { client, params }
    }

    pub async fn generate(
        &self,
        request: &ContentIdeasRequest,
    ) -> CampaignResult<Vec<ContentIdeaBlock>> {
        let violations = request.validate();
        if !violations.is_empty() {
            return Err(CampaignError::Validation(violations.join("; ")));
        }

        let prompt = content_ideas_prompt(request);
        debug!(prompt_len = prompt.len(), "Generated content-ideas prompt");
        metrics::counter!("ai.requests", "generator" => "content_ideas").increment(1);

        let raw = self
            .client
            .complete(&CompletionRequest::new(prompt, self.params))
            .await?;
        let blocks = parse_content_ideas(&raw)?;

        info!(
            provider = self.client.provider_name(),
            blocks = blocks.len(),
            ideas = blocks.iter().map(|b| b.ideas.len()).sum::<usize>(),
            "Content ideas generated"
        );
        Ok(blocks)
    }
}

/// Parse the `campaign_content_ideas` envelope, also accepting a bare array.
/// Every block must match the expected shape.
pub fn parse_content_ideas(raw: &str) -> CampaignResult<Vec<ContentIdeaBlock>> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        CampaignError::AiResponse(format!("AI response was not valid JSON. Details: {e}"))
    })?;

    let blocks = match parsed {
        Value::Object(mut envelope) => match envelope.remove("campaign_content_ideas") {
            Some(blocks @ Value::Array(_)) => blocks,
            Some(_) => {
                return Err(CampaignError::AiResponse(
                    "AI response structure error: 'campaign_content_ideas' is not an array."
                        .to_string(),
                ))
            }
            None => return Err(unrecognized()),
        },
        blocks @ Value::Array(_) => {
            warn!("AI returned a bare array, expected an object with 'campaign_content_ideas'");
            blocks
        }
        _ => return Err(unrecognized()),
    };

    serde_json::from_value(blocks).map_err(|e| {
        CampaignError::AiResponse(format!(
            "AI response structure is invalid after processing and validation: {e}"
        ))
    })
}

fn unrecognized() -> CampaignError {
    CampaignError::AiResponse(
        "AI response JSON structure not recognized. Expected object with 'campaign_content_ideas'."
            .to_string(),
    )
}
