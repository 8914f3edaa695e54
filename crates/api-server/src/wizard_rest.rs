//! Campaign wizard REST endpoints: AI strategy and content-idea generation.

use crate::rest::{ApiError, AppState, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campaign_core::error::CampaignError;
use campaign_core::wizard::{
    ContentIdeasRequest, ContentIdeasResponse, StrategyRequest, StrategyResponse,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

const INVALID_INPUT: &str = "Invalid input";
const AI_SERVICE_ERROR: &str =
    "Error communicating with AI service. Please check your configuration and try again.";

fn decode<T: DeserializeOwned>(body: Result<Json<Value>, JsonRejection>) -> Result<T, ApiError> {
    let value = body.map_err(|rejection| {
        ErrorResponse::new(INVALID_INPUT)
            .with_details(rejection.body_text())
            .status(StatusCode::BAD_REQUEST)
    })?;
    serde_json::from_value(value.0).map_err(|e| {
        ErrorResponse::new(INVALID_INPUT)
            .with_details(e.to_string())
            .status(StatusCode::BAD_REQUEST)
    })
}

fn not_configured() -> ApiError {
    ErrorResponse::new(CampaignError::AiNotConfigured.to_string())
        .status(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Map a generator failure onto the response envelope. `parse_failure` is the
/// message shown when the model answered with an unusable structure.
fn generation_error(err: CampaignError, parse_failure: &str) -> ApiError {
    if !matches!(err, CampaignError::Validation(_)) {
        metrics::counter!("ai.errors").increment(1);
    }
    match err {
        CampaignError::Validation(details) => ErrorResponse::new(INVALID_INPUT)
            .with_details(details)
            .status(StatusCode::BAD_REQUEST),
        CampaignError::AiNotConfigured => not_configured(),
        CampaignError::AiResponse(details) => {
            warn!(details = %details, "Unusable AI response");
            ErrorResponse::new(parse_failure)
                .with_details(details)
                .status(StatusCode::INTERNAL_SERVER_ERROR)
        }
        CampaignError::AiService(details) => {
            error!(details = %details, "AI service call failed");
            ErrorResponse::new(AI_SERVICE_ERROR)
                .with_details(details)
                .status(StatusCode::BAD_GATEWAY)
        }
        other => {
            error!(error = %other, "Generation failed");
            ErrorResponse::new("An unexpected error occurred.")
                .status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/generate-strategy: Per-platform marketing strategies.
#[utoipa::path(
    post,
    path = "/api/generate-strategy",
    tag = "Wizard",
    request_body = StrategyRequest,
    responses(
        (status = 200, description = "Generated strategies", body = StrategyResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "AI not configured or unusable response", body = ErrorResponse),
        (status = 502, description = "AI service unreachable", body = ErrorResponse),
    )
)]
pub async fn handle_generate_strategy(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StrategyResponse>, ApiError> {
    let request: StrategyRequest = decode(body)?;
    let generator = state.strategies.as_ref().ok_or_else(not_configured)?;

    let strategies = generator
        .generate(&request)
        .await
        .map_err(|e| generation_error(e, "Failed to parse marketing strategies from AI."))?;
    Ok(Json(StrategyResponse { strategies }))
}

/// POST /api/content-ideas: Headlines, captions and CTAs per platform/goal.
#[utoipa::path(
    post,
    path = "/api/content-ideas",
    tag = "Wizard",
    request_body = ContentIdeasRequest,
    responses(
        (status = 200, description = "Generated content ideas", body = ContentIdeasResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "AI not configured or unusable response", body = ErrorResponse),
        (status = 502, description = "AI service unreachable", body = ErrorResponse),
    )
)]
pub async fn handle_content_ideas(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContentIdeasResponse>, ApiError> {
    let request: ContentIdeasRequest = decode(body)?;
    let generator = state.content_ideas.as_ref().ok_or_else(not_configured)?;

    let content_ideas = generator
        .generate(&request)
        .await
        .map_err(|e| generation_error(e, "Failed to parse content ideas from AI."))?;
    Ok(Json(ContentIdeasResponse { content_ideas }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_agents::{ContentIdeaGenerator, StaticCompletionClient, StrategyGenerator};
    use campaign_core::config::GenerationConfig;
    use campaign_reporting::PerformanceAnalyzer;
    use serde_json::json;
    use std::sync::Arc;

    const PARAMS: GenerationConfig = GenerationConfig {
        temperature: 0.5,
        max_tokens: 1000,
    };

    fn state_with(response: Value) -> AppState {
        let client = Arc::new(StaticCompletionClient::new(response.to_string()));
        AppState::new(Arc::new(PerformanceAnalyzer::default()), "node-test".to_string())
            .with_generators(
                Arc::new(StrategyGenerator::new(client.clone(), PARAMS)),
                Arc::new(ContentIdeaGenerator::new(client, PARAMS)),
            )
    }

    fn strategy_body() -> Value {
        json!({
            "goals": ["engagement"],
            "platforms": ["tiktok"],
            "brand_offer_details": "Streetwear drop"
        })
    }

    #[tokio::test]
    async fn test_strategy_without_ai_is_server_error() {
        let state = AppState::new(Arc::new(PerformanceAnalyzer::default()), "n".to_string());
        let (status, Json(body)) = handle_generate_strategy(State(state), Ok(Json(strategy_body())))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "AI service is not configured.");
    }

    #[tokio::test]
    async fn test_strategy_success() {
        let state = state_with(json!({"campaign_strategies": [{
            "goal": "engagement",
            "platform": "tiktok",
            "strategy_title": "Duet Challenge",
            "summary": "Invite creators to duet.",
            "recommendations": ["Seed with five creators."],
            "rationale": "Native format.",
            "kpis": ["Engagement Rate"]
        }]}));
        let Json(response) = handle_generate_strategy(State(state), Ok(Json(strategy_body())))
            .await
            .unwrap();
        assert_eq!(response.strategies.len(), 1);
        assert_eq!(response.strategies[0].strategy_title, "Duet Challenge");
    }

    #[tokio::test]
    async fn test_strategy_invalid_input_lists_violations() {
        let state = state_with(json!({}));
        let (status, Json(body)) = handle_generate_strategy(State(state), Ok(Json(json!({}))))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, INVALID_INPUT);
        assert!(body.details.unwrap().contains("platforms: Platforms cannot be empty."));
    }

    #[tokio::test]
    async fn test_strategy_unusable_response() {
        let state = state_with(json!({"unexpected": true}));
        let (status, Json(body)) = handle_generate_strategy(State(state), Ok(Json(strategy_body())))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to parse marketing strategies from AI.");
    }

    #[tokio::test]
    async fn test_content_ideas_wrong_types_rejected() {
        let state = state_with(json!({}));
        let (status, _) = handle_content_ideas(State(state), Ok(Json(json!({"goals": "engagement"}))))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_content_ideas_success() {
        let state = state_with(json!({"campaign_content_ideas": [{
            "platform": "instagram",
            "goal": "brand_awareness",
            "ideas": [{
                "headline": "Stretch Between Meetings",
                "visual_direction": "Reel of a desk stretch.",
                "caption": "Five minutes is enough.",
                "cta": "Book a Class"
            }]
        }]}));
        let body = json!({
            "goals": ["brand_awareness"],
            "platforms": ["instagram"],
            "brand_offer_details": "Online yoga for busy professionals",
            "demographics": {"age_range": ["25-34"], "gender": ["female"], "location": "Austin"}
        });
        let Json(response) = handle_content_ideas(State(state), Ok(Json(body))).await.unwrap();
        assert_eq!(response.content_ideas[0].ideas[0].cta, "Book a Class");
        assert!(response.content_ideas[0].ideas[0].hashtag_suggestions.is_none());
    }
}
