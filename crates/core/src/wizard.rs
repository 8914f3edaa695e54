//! Campaign wizard payloads for the AI-backed strategy and content-idea
//! generators, with boundary validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length of the brand/offer description for content ideas.
pub const MAX_BRAND_DETAILS_LEN: usize = 500;

/// Minimum length of the brand/offer description for content ideas.
pub const MIN_BRAND_DETAILS_LEN: usize = 10;

/// Target audience collected by the audience step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Demographics {
    #[serde(default)]
    pub age_range: Vec<String>,
    #[serde(default)]
    pub gender: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl Demographics {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

// ─── Strategy Generation ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StrategyRequest {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub brand_offer_details: String,
    #[serde(default)]
    pub campaign_budget: Option<f64>,
    #[serde(default)]
    pub kpis: Vec<String>,
}

impl StrategyRequest {
    /// Collect every violation instead of stopping at the first one.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.goals.is_empty() {
            violations.push("goals: Goals cannot be empty.".to_string());
        }
        if self.platforms.is_empty() {
            violations.push("platforms: Platforms cannot be empty.".to_string());
        }
        if self.brand_offer_details.is_empty() {
            violations.push("brand_offer_details: Brand/offer details cannot be empty.".to_string());
        }
        violations
    }
}

/// One AI-generated strategy for a platform/goal combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrategyOutput {
    pub goal: String,
    pub platform: String,
    pub strategy_title: String,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub rationale: String,
    pub kpis: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrategyResponse {
    pub strategies: Vec<StrategyOutput>,
}

// ─── Content Ideas ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContentIdeasRequest {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub brand_offer_details: String,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub audience_interests: Vec<String>,
}

impl ContentIdeasRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.goals.is_empty() {
            violations.push("goals: Goals cannot be empty.".to_string());
        }
        if self.platforms.is_empty() {
            violations.push("platforms: Platforms cannot be empty.".to_string());
        }
        let details_len = self.brand_offer_details.chars().count();
        if details_len < MIN_BRAND_DETAILS_LEN {
            violations.push(format!(
                "brand_offer_details: Brand/offer details must be at least {MIN_BRAND_DETAILS_LEN} characters."
            ));
        } else if details_len > MAX_BRAND_DETAILS_LEN {
            violations.push(format!(
                "brand_offer_details: Brand/offer details must be at most {MAX_BRAND_DETAILS_LEN} characters."
            ));
        }
        if self.demographics.age_range.is_empty() {
            violations.push("demographics.age_range: Age range cannot be empty.".to_string());
        }
        if self.demographics.gender.is_empty() {
            violations.push("demographics.gender: Gender cannot be empty.".to_string());
        }
        if self.demographics.location().is_none() {
            violations.push("demographics.location: Location cannot be empty.".to_string());
        }
        violations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentIdea {
    pub headline: String,
    pub visual_direction: String,
    pub caption: String,
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag_suggestions: Option<Vec<String>>,
}

/// Ideas generated for one platform/goal combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentIdeaBlock {
    pub platform: String,
    pub goal: String,
    pub ideas: Vec<ContentIdea>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentIdeasResponse {
    pub content_ideas: Vec<ContentIdeaBlock>,
}
