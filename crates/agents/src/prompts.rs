//! Prompt construction for the strategy and content-idea agents.

use campaign_core::campaign::humanize_key;
use campaign_core::wizard::{ContentIdeasRequest, Demographics, StrategyRequest};

/// One `- Platform: p, Goal: g` line per platform × goal, platforms outermost.
pub fn combination_lines(platforms: &[String], goals: &[String]) -> String {
    platforms
        .iter()
        .flat_map(|platform| {
            goals
                .iter()
                .map(move |goal| format!("- Platform: {platform}, Goal: {}", humanize_key(goal)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_demographics(demo: &Demographics) -> String {
    let mut parts = Vec::new();
    if !demo.age_range.is_empty() {
        parts.push(format!("Target ages: {}", demo.age_range.join(", ")));
    }
    if !demo.gender.is_empty() {
        parts.push(format!("Target genders: {}", demo.gender.join(", ")));
    }
    if let Some(location) = demo.location() {
        parts.push(format!("Location: {location}"));
    }
    if let Some(language) = demo.language() {
        parts.push(format!("Language: {language}"));
    }
    if parts.is_empty() {
        "No specific demographic details provided.".to_string()
    } else {
        format!("Demographics: {}.", parts.join("; "))
    }
}

fn describe_budget(budget: Option<f64>) -> String {
    match budget {
        Some(b) if b > 0.0 => format!("The campaign has an approximate budget of ${b}."),
        _ => "No specific budget provided.".to_string(),
    }
}

fn describe_kpis(kpis: &[String]) -> String {
    if kpis.is_empty() {
        "No specific KPIs were highlighted by the user, focus on standard KPIs for the goals."
            .to_string()
    } else {
        format!(
            "The user is particularly interested in tracking these KPIs: {}.",
            kpis.join(", ")
        )
    }
}

pub fn strategy_prompt(input: &StrategyRequest) -> String {
    let brand = &input.brand_offer_details;
    format!(
        r#"You are an expert marketing strategist AI. Your task is to generate a detailed and actionable marketing strategy for EACH of the specified platform and goal combinations.

Campaign Context:
- Brand/Offer: "{brand}"
- {demographics}
- {budget}
- {kpis}

Generate a strategy for EACH of the following platform and goal combinations:
{combinations}

For each strategy, provide the following information:
1.  "goal": The specific marketing goal (e.g., "sales_conversions", "brand_awareness").
2.  "platform": The specific platform (e.g., "facebook", "pinterest").
3.  "strategy_title": A concise and descriptive title for the strategy.
4.  "summary": A brief summary (2-3 sentences) of the overall approach for this platform and goal.
5.  "recommendations": An array of 3-5 specific, actionable recommendations covering creative direction, ad formats, targeting, bidding/budgeting and call-to-action advice.
6.  "rationale": A brief explanation (1-2 sentences) of why this strategy suits the given context, platform, and goal.
7.  "kpis": An array of 2-3 key performance indicators most relevant for measuring this strategy (e.g., ["ROAS", "Conversion Rate"]).

IMPORTANT: Respond ONLY with a single valid JSON object.
This object MUST have a top-level key named "campaign_strategies".
The value of the "campaign_strategies" key MUST be an array of strategy objects, each with exactly the fields goal, platform, strategy_title, summary, recommendations, rationale, kpis.
Do NOT include any explanatory text outside of this single JSON object.
Ensure all string values are properly escaped and the JSON object is complete.

Example of the entire JSON object structure:
{{
  "campaign_strategies": [
    {{
      "goal": "sales_conversions",
      "platform": "pinterest",
      "strategy_title": "Pinterest Promoted Pins for Direct Sales",
      "summary": "Leverage Pinterest's visual discovery with Promoted Pins that lead directly to product pages.",
      "recommendations": [
        "Use vertical pins optimized for mobile viewing.",
        "Target users based on their search terms and interests related to '{brand}'.",
        "A/B test pin descriptions and CTAs to optimize click-through and conversion rates."
      ],
      "rationale": "Pinterest users often have high purchase intent, making it ideal for driving sales.",
      "kpis": ["ROAS", "CPA", "Conversion Rate"]
    }}
  ]
}}

Now, generate the marketing strategies based on the provided campaign context.
"#,
        demographics = describe_demographics(&input.demographics),
        budget = describe_budget(input.campaign_budget),
        kpis = describe_kpis(&input.kpis),
        combinations = combination_lines(&input.platforms, &input.goals),
    )
}

fn describe_audience(demo: &Demographics) -> String {
    let language = demo
        .language()
        .map(|l| format!(" who speak {l}"))
        .unwrap_or_default();
    format!(
        "Target audience is {} aged {} located in {}{}.",
        demo.gender.join("/"),
        demo.age_range.join(", "),
        demo.location().unwrap_or_default(),
        language
    )
}

fn describe_interests(interests: &[String]) -> String {
    if interests.is_empty() {
        "No specific interests provided, focus on general appeal based on demographics."
            .to_string()
    } else {
        format!("They are interested in: {}.", interests.join(", "))
    }
}

pub fn content_ideas_prompt(input: &ContentIdeasRequest) -> String {
    format!(
        r##"You are an expert marketing assistant. Your task is to generate innovative and engaging content ideas for a marketing campaign.
The campaign details are as follows:
- Brand/Offer: "{brand}"
- {audience}
- {interests}

Generate 2-3 unique content ideas for EACH of the following platform and goal combinations:
{combinations}

For each content idea, provide:
1.  "headline": A catchy headline (max 15 words).
2.  "visual_direction": A brief description of the visual concept (e.g., "Instagram Reel: Busy professional unwinds at home.").
3.  "caption": A compelling caption (max 50 words).
4.  "cta": A clear call to action (e.g., "Watch Demo", "Sign Up Now").
5.  "hashtag_suggestions": An array of 3-5 relevant hashtags (e.g., ["#YogaAtHome", "#WellnessJourney"]).

IMPORTANT: Respond ONLY with a single valid JSON object.
This object MUST have a top-level key named "campaign_content_ideas".
The value of the "campaign_content_ideas" key MUST be an array of content idea blocks, each with this structure:
{{
  "platform": "string (e.g., instagram)",
  "goal": "string (e.g., brand_awareness)",
  "ideas": [
    {{
      "headline": "string",
      "visual_direction": "string",
      "caption": "string",
      "cta": "string",
      "hashtag_suggestions": ["string", "string"]
    }}
  ]
}}
Do NOT include any explanatory text before or after the JSON output. The entire response must be a single JSON object.
Ensure all string values within the JSON are properly escaped.

Now, generate the content ideas based on the provided campaign details.
"##,
        brand = input.brand_offer_details,
        audience = describe_audience(&input.demographics),
        interests = describe_interests(&input.audience_interests),
        combinations = combination_lines(&input.platforms, &input.goals),
    )
}
