//! Performance-analysis domain types: request payload, per-metric results,
//! and the aggregated report returned to the dashboard.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// ─── Request ────────────────────────────────────────────────────────────────

/// Body of `POST /api/performance-analysis`.
///
/// `metrics` and `past_metrics` are kept as raw JSON so that entries with
/// non-numeric values can be skipped instead of rejecting the whole request.
/// `platform` is only echoed back, so any JSON value is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PerformanceAnalysisRequest {
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub platform: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metrics: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub past_metrics: Option<Value>,
}

// ─── Per-metric Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MetricStatus {
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    #[serde(rename = "On Target")]
    OnTarget,
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Not benchmarked")]
    NotBenchmarked,
}

/// Traffic-light flag used by the dashboard badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricFlag {
    Good,
    OnTarget,
    Warning,
}

/// Reported trend. Reflects the direction token of the comparison with the
/// prior period, not whether the change is good for the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TrendLabel {
    Improved,
    Declined,
    #[serde(rename = "No change")]
    NoChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricAnalysisResult {
    pub metric: String,
    pub label: String,
    pub value: f64,
    pub past_value: Option<f64>,
    pub status: MetricStatus,
    pub flag: MetricFlag,
    pub message: String,
    pub benchmark: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendLabel>,
}

// ─── Report ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub platform: Option<Value>,
    pub summary: String,
    pub analysis: Vec<MetricAnalysisResult>,
    pub adjustment_recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_and_flag_wire_names() {
        assert_eq!(
            serde_json::to_value(MetricStatus::NeedsAttention).unwrap(),
            json!("Needs Attention")
        );
        assert_eq!(
            serde_json::to_value(MetricStatus::NotBenchmarked).unwrap(),
            json!("Not benchmarked")
        );
        assert_eq!(serde_json::to_value(MetricFlag::OnTarget).unwrap(), json!("on_target"));
        assert_eq!(serde_json::to_value(TrendLabel::NoChange).unwrap(), json!("No change"));
    }

    #[test]
    fn test_result_omits_absent_trend_but_keeps_null_past_value() {
        let result = MetricAnalysisResult {
            metric: "leads".to_string(),
            label: "Leads".to_string(),
            value: 120.0,
            past_value: None,
            status: MetricStatus::NotBenchmarked,
            flag: MetricFlag::OnTarget,
            message: "No available industry comparison for this metric.".to_string(),
            benchmark: "N/A".to_string(),
            trend: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("trend").is_none());
        assert_eq!(value["past_value"], Value::Null);
    }

    #[test]
    fn test_request_accepts_missing_optional_fields() {
        let request: PerformanceAnalysisRequest =
            serde_json::from_value(json!({"goal": "lead_generation", "metrics": {"cvr": 4}}))
                .unwrap();
        assert_eq!(request.goal.as_deref(), Some("lead_generation"));
        assert!(request.platform.is_none());
        assert!(request.past_metrics.is_none());
    }

    #[test]
    fn test_request_keeps_non_string_platform() {
        let request: PerformanceAnalysisRequest =
            serde_json::from_value(json!({"goal": "engagement", "platform": 3, "metrics": {}}))
                .unwrap();
        assert_eq!(request.platform, Some(json!(3)));
    }
}
