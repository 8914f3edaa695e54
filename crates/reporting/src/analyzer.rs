//! Performance report aggregation: runs the evaluator over every submitted
//! metric and synthesizes the dashboard headline and adjustment bullets.

use crate::benchmarks::MetricCatalog;
use crate::evaluator::MetricEvaluator;
use campaign_core::error::{CampaignError, CampaignResult};
use campaign_core::performance::{
    AnalysisReport, MetricAnalysisResult, MetricFlag, PerformanceAnalysisRequest,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: goal, metrics (must be an object)";

const ALL_NORMAL_SUMMARY: &str =
    "All submitted metrics appear to be within normal ranges. Continue monitoring and optimizing.";
const NO_CRITICAL_ISSUES: &str = "No critical issues found based on provided metrics. Continue optimizing and reviewing new creative/audiences routinely.";
const NO_METRICS_ANALYZED: &str = "No metrics were analyzed. Please provide valid performance data.";

pub struct PerformanceAnalyzer {
    evaluator: MetricEvaluator,
}

impl PerformanceAnalyzer {
    pub fn new(catalog: Arc<MetricCatalog>) -> Self {
        Self {
            evaluator: MetricEvaluator::new(catalog),
        }
    }

    pub fn evaluator(&self) -> &MetricEvaluator {
        &self.evaluator
    }

    /// Analyze a request body as received from the dashboard.
    pub fn analyze(&self, request: &PerformanceAnalysisRequest) -> CampaignResult<AnalysisReport> {
        let goal = request.goal.as_deref().unwrap_or_default();
        let metrics = request.metrics.as_ref().unwrap_or(&Value::Null);
        self.aggregate(
            goal,
            request.platform.as_ref(),
            metrics,
            request.past_metrics.as_ref(),
        )
    }

    /// Build a report from raw metric mappings. Entries whose value is not a
    /// finite number are skipped rather than rejected.
    pub fn aggregate(
        &self,
        goal: &str,
        platform: Option<&Value>,
        metrics: &Value,
        past_metrics: Option<&Value>,
    ) -> CampaignResult<AnalysisReport> {
        let metrics = match metrics.as_object() {
            Some(m) if !goal.is_empty() => m,
            _ => return Err(CampaignError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        };
        let past_metrics = past_metrics.and_then(Value::as_object);

        let analysis: Vec<MetricAnalysisResult> = metrics
            .iter()
            .filter_map(|(key, value)| self.analyze_entry(key, value, past_metrics))
            .collect();

        debug!(
            goal = goal,
            submitted = metrics.len(),
            analyzed = analysis.len(),
            "Performance metrics evaluated"
        );

        Ok(AnalysisReport {
            goal: goal.to_string(),
            platform: platform.cloned(),
            summary: summarize(&analysis),
            adjustment_recommendations: adjustment_recommendations(&analysis),
            analysis,
        })
    }

    fn analyze_entry(
        &self,
        key: &str,
        value: &Value,
        past_metrics: Option<&Map<String, Value>>,
    ) -> Option<MetricAnalysisResult> {
        let Some(current) = finite_number(value) else {
            warn!(metric = key, value = %value, "Skipping non-numeric metric");
            return None;
        };
        let past = past_metrics.and_then(|p| p.get(key)).and_then(finite_number);
        let eval = self.evaluator.evaluate(key, current, past);

        Some(MetricAnalysisResult {
            metric: key.to_string(),
            label: self.evaluator.catalog().label(key),
            value: current,
            past_value: past,
            status: eval.status,
            flag: eval.flag,
            message: eval.message,
            benchmark: eval.benchmark,
            trend: eval.trend,
        })
    }
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(MetricCatalog::industry_default()))
    }
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

fn plural(n: usize) -> &'static str {
    if n > 1 {
        "s are"
    } else {
        " is"
    }
}

/// Headline shown above the per-metric table.
pub fn summarize(analysis: &[MetricAnalysisResult]) -> String {
    let warnings = analysis.iter().filter(|r| r.flag == MetricFlag::Warning).count();
    let goods = analysis.iter().filter(|r| r.flag == MetricFlag::Good).count();

    if warnings > 0 {
        format!(
            "⚠️ {warnings} metric{} under industry benchmarks. Review suggestions below.",
            plural(warnings)
        )
    } else if goods > 0 {
        format!(
            "✅ {goods} metric{} beating benchmarks—opportunity to scale!",
            plural(goods)
        )
    } else {
        ALL_NORMAL_SUMMARY.to_string()
    }
}

/// One bullet per warning, in analysis order.
pub fn adjustment_recommendations(analysis: &[MetricAnalysisResult]) -> Vec<String> {
    let bullets: Vec<String> = analysis
        .iter()
        .filter(|r| r.flag == MetricFlag::Warning)
        .map(|r| format!("[{}]: {}", r.label, r.message))
        .collect();

    if !bullets.is_empty() {
        bullets
    } else if analysis.is_empty() {
        vec![NO_METRICS_ANALYZED.to_string()]
    } else {
        vec![NO_CRITICAL_ISSUES.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::performance::{MetricStatus, TrendLabel};
    use serde_json::json;

    fn analyzer() -> PerformanceAnalyzer {
        PerformanceAnalyzer::default()
    }

    #[test]
    fn test_non_numeric_entries_are_dropped_in_order() {
        let report = analyzer()
            .aggregate("sales_conversions", None, &json!({"cvr": 5, "ctr": "bad", "roas": 3}), None)
            .unwrap();
        assert_eq!(report.analysis.len(), 2);
        let keys: Vec<&str> = report.analysis.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(keys, vec!["cvr", "roas"]);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let report = analyzer()
            .aggregate(
                "engagement",
                Some(&json!("tiktok")),
                &json!({"roas": 3, "aov": 80, "cvr": 5, "bounce_rate": 50}),
                None,
            )
            .unwrap();
        let keys: Vec<&str> = report.analysis.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(keys, vec!["roas", "aov", "cvr", "bounce_rate"]);
        assert_eq!(report.platform, Some(json!("tiktok")));
    }

    #[test]
    fn test_empty_metrics() {
        let report = analyzer().aggregate("lead_generation", None, &json!({}), None).unwrap();
        assert!(report.analysis.is_empty());
        assert_eq!(report.summary, ALL_NORMAL_SUMMARY);
        assert_eq!(
            report.adjustment_recommendations,
            vec!["No metrics were analyzed. Please provide valid performance data.".to_string()]
        );
    }

    #[test]
    fn test_all_warnings() {
        let report = analyzer()
            .aggregate("sales_conversions", None, &json!({"roas": 1.0, "cvr": 1.5}), None)
            .unwrap();
        assert!(report.summary.starts_with("⚠️"));
        assert_eq!(
            report.summary,
            "⚠️ 2 metrics are under industry benchmarks. Review suggestions below."
        );
        assert_eq!(report.adjustment_recommendations.len(), 2);
        assert!(report.adjustment_recommendations[0].starts_with("[Return on Ad Spend (x)]: Low ROAS"));
        assert!(report.adjustment_recommendations[1].starts_with("[Conversion Rate (%)]: Test a clearer"));
    }

    #[test]
    fn test_single_warning_is_singular() {
        let report = analyzer()
            .aggregate("sales_conversions", None, &json!({"roas": 1.0, "cvr": 5}), None)
            .unwrap();
        assert_eq!(
            report.summary,
            "⚠️ 1 metric is under industry benchmarks. Review suggestions below."
        );
        assert_eq!(report.adjustment_recommendations.len(), 1);
    }

    #[test]
    fn test_goods_without_warnings() {
        let report = analyzer()
            .aggregate("sales_conversions", None, &json!({"roas": 4, "cvr": 5}), None)
            .unwrap();
        assert_eq!(report.summary, "✅ 1 metric is beating benchmarks—opportunity to scale!");
        assert_eq!(report.adjustment_recommendations, vec![NO_CRITICAL_ISSUES.to_string()]);

        let report = analyzer()
            .aggregate("sales_conversions", None, &json!({"roas": 4, "ctr": 3}), None)
            .unwrap();
        assert_eq!(report.summary, "✅ 2 metrics are beating benchmarks—opportunity to scale!");
    }

    #[test]
    fn test_unbenchmarked_metrics_only() {
        let report = analyzer()
            .aggregate("brand_awareness", None, &json!({"impressions": 10000, "leads": 40}), None)
            .unwrap();
        assert_eq!(report.summary, ALL_NORMAL_SUMMARY);
        assert_eq!(report.analysis[0].label, "Impressions");
        assert_eq!(report.analysis[1].status, MetricStatus::NotBenchmarked);
        assert_eq!(report.adjustment_recommendations, vec![NO_CRITICAL_ISSUES.to_string()]);
    }

    #[test]
    fn test_past_metrics_feed_trend() {
        let report = analyzer()
            .aggregate(
                "lead_generation",
                None,
                &json!({"cpl": 30, "cvr": 4}),
                Some(&json!({"cpl": 60, "cvr": "n/a"})),
            )
            .unwrap();
        let cpl = &report.analysis[0];
        assert_eq!(cpl.past_value, Some(60.0));
        assert_eq!(cpl.trend, Some(TrendLabel::Declined));
        let cvr = &report.analysis[1];
        assert_eq!(cvr.past_value, None);
        assert!(cvr.trend.is_none());
    }

    #[test]
    fn test_value_is_reported_unnormalized() {
        let report = analyzer()
            .aggregate("sales_conversions", None, &json!({"ctr": 0.012}), None)
            .unwrap();
        assert_eq!(report.analysis[0].value, 0.012);
        assert_eq!(report.analysis[0].status, MetricStatus::OnTarget);
    }

    #[test]
    fn test_missing_goal_is_validation_error() {
        let err = analyzer().aggregate("", None, &json!({"cvr": 5}), None).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_metrics_must_be_object() {
        for metrics in [json!(null), json!([1, 2]), json!("cvr=5"), json!(4)] {
            let err = analyzer().aggregate("engagement", None, &metrics, None).unwrap_err();
            assert!(matches!(err, CampaignError::Validation(_)));
        }
    }

    #[test]
    fn test_analyze_request() {
        let request: PerformanceAnalysisRequest = serde_json::from_value(json!({
            "goal": "sales_conversions",
            "platform": "facebook",
            "metrics": {"roas": 2.5},
            "past_metrics": {"roas": 2.0}
        }))
        .unwrap();
        let report = analyzer().analyze(&request).unwrap();
        assert_eq!(report.analysis[0].trend, Some(TrendLabel::Improved));
        assert!(report.analysis[0]
            .message
            .ends_with(" You've improved over the last period—great!"));

        let missing = PerformanceAnalysisRequest::default();
        assert!(analyzer().analyze(&missing).is_err());
    }

    #[test]
    fn test_report_serializes_without_platform() {
        let report = analyzer().aggregate("engagement", None, &json!({"cvr": 5}), None).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("platform").is_none());
        assert_eq!(value["analysis"][0]["status"], "On Target");
        assert_eq!(value["analysis"][0]["flag"], "on_target");
    }
}
