//! Campaign goal and platform catalogue shared by the wizard endpoints.

const GOAL_LABELS: &[(&str, &str)] = &[
    ("sales_conversions", "Sales / Conversions"),
    ("lead_generation", "Lead Generation"),
    ("brand_awareness", "Brand Awareness"),
    ("engagement", "Engagement"),
    ("website_traffic", "Website Traffic"),
];

const PLATFORM_LABELS: &[(&str, &str)] = &[
    ("facebook", "Facebook"),
    ("instagram", "Instagram"),
    ("google_ads", "Google Ads"),
    ("linkedin", "LinkedIn"),
    ("tiktok", "TikTok"),
    ("pinterest", "Pinterest"),
    ("twitter_x", "Twitter / X"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, label)| *label)
}

/// Replace underscores with spaces: `sales_conversions` → `sales conversions`.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Display label for a campaign goal, falling back to the humanized key.
pub fn goal_label(goal: &str) -> String {
    lookup(GOAL_LABELS, goal)
        .map(str::to_string)
        .unwrap_or_else(|| humanize_key(goal))
}

/// Display label for an ad platform, falling back to the humanized key.
pub fn platform_label(platform: &str) -> String {
    lookup(PLATFORM_LABELS, platform)
        .map(str::to_string)
        .unwrap_or_else(|| humanize_key(platform))
}

/// All goal keys known to the wizard, in display order.
pub fn known_goals() -> impl Iterator<Item = &'static str> {
    GOAL_LABELS.iter().map(|(k, _)| *k)
}

/// All platform keys known to the wizard, in display order.
pub fn known_platforms() -> impl Iterator<Item = &'static str> {
    PLATFORM_LABELS.iter().map(|(k, _)| *k)
}
