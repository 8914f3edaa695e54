//! Chat-completion clients used by the strategy and content-idea agents.

use async_trait::async_trait;
use campaign_core::config::{AiConfig, GenerationConfig};
use campaign_core::error::{CampaignError, CampaignResult};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// A single-prompt completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: String, params: GenerationConfig) -> Self {
        Self {
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

/// Generative text service. Returns the raw message content, which is
/// expected (but not guaranteed) to be a JSON object.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> CampaignResult<String>;

    fn provider_name(&self) -> &'static str;
}

// ─── Azure OpenAI ───────────────────────────────────────────────────────────

pub struct AzureOpenAiClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    client: reqwest::Client,
}

impl AzureOpenAiClient {
    /// Build a client from config. Fails when endpoint or key is missing.
    pub fn from_config(config: &AiConfig) -> CampaignResult<Self> {
        if !config.is_configured() {
            return Err(CampaignError::AiNotConfigured);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| CampaignError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint.clone().unwrap_or_default(),
            api_key: config.api_key.clone().unwrap_or_default(),
            deployment: config.deployment.clone(),
            api_version: config.api_version.clone(),
            client,
        })
    }

    pub fn chat_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": self.deployment,
            "messages": [{ "role": "user", "content": request.prompt }],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "response_format": { "type": "json_object" },
        })
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> CampaignResult<String> {
        let url = self.chat_url();
        debug!(deployment = %self.deployment, max_tokens = request.max_tokens, "Sending completion request");

        let resp = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| CampaignError::AiService(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(CampaignError::AiService(format!(
                "Azure OpenAI chat API error (status {status}): {error_text}"
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| CampaignError::AiService(e.to_string()))?;
        extract_content(&body)
    }

    fn provider_name(&self) -> &'static str {
        "azure-openai"
    }
}

/// Pull `choices[0].message.content` out of a chat-completion response.
pub fn extract_content(body: &Value) -> CampaignResult<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| CampaignError::AiResponse("AI did not return a response.".to_string()))
}

// ─── Static ─────────────────────────────────────────────────────────────────

/// Returns a fixed completion. Used in tests and local demos.
#[derive(Debug, Clone)]
pub struct StaticCompletionClient {
    response: String,
}

impl StaticCompletionClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for StaticCompletionClient {
    async fn complete(&self, _request: &CompletionRequest) -> CampaignResult<String> {
        Ok(self.response.clone())
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}
