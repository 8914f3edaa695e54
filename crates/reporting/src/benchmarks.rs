//! Industry benchmark catalog: thresholds, display labels and
//! recommendation copy for every metric the evaluator understands.
//!
//! The catalog is immutable once built and is shared by reference between
//! concurrent analyses.

use std::collections::HashMap;

// ─── Metric Kinds ───────────────────────────────────────────────────────────

/// Per-metric tags. `Percentage` and `InvertedPolarity` change how the
/// evaluator reads a value; the rest only pick the display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Submitted either as a percentage (`4.5`) or a fraction (`0.045`).
    Percentage,
    /// Lower values are better (e.g. bounce rate).
    InvertedPolarity,
    /// Spend per outcome.
    Cost,
    /// Multiplier such as return on ad spend.
    Ratio,
    /// Currency amount per transaction.
    Monetary,
}

// ─── Benchmark ──────────────────────────────────────────────────────────────

/// Inclusive industry range for one metric. At least one bound is present.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBenchmark {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub note: String,
    pub kinds: Vec<MetricKind>,
}

impl MetricBenchmark {
    pub fn new(min: Option<f64>, max: Option<f64>, note: &str, kinds: &[MetricKind]) -> Self {
        debug_assert!(min.is_some() || max.is_some(), "benchmark needs a bound");
        Self {
            min,
            max,
            note: note.to_string(),
            kinds: kinds.to_vec(),
        }
    }

    pub fn has_kind(&self, kind: MetricKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_percentage(&self) -> bool {
        self.has_kind(MetricKind::Percentage)
    }

    pub fn is_inverted(&self) -> bool {
        self.has_kind(MetricKind::InvertedPolarity)
    }

    /// Display unit for dashboards: `%`, `$`, `x` or empty.
    pub fn unit(&self) -> &'static str {
        self.kinds
            .iter()
            .find_map(|kind| match kind {
                MetricKind::Percentage => Some("%"),
                MetricKind::Cost | MetricKind::Monetary => Some("$"),
                MetricKind::Ratio => Some("x"),
                MetricKind::InvertedPolarity => None,
            })
            .unwrap_or("")
    }
}

/// Recommendation copy for below-, within- and above-benchmark performance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub low: String,
    pub mid: String,
    pub high: String,
}

impl RecommendationSet {
    pub fn new(low: &str, mid: &str, high: &str) -> Self {
        Self {
            low: low.to_string(),
            mid: mid.to_string(),
            high: high.to_string(),
        }
    }

    /// Used for metrics without dedicated copy.
    pub fn generic() -> Self {
        Self::new(
            "Action recommended.",
            "Performance is standard.",
            "Performance is strong.",
        )
    }
}

// ─── Catalog ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MetricCatalog {
    benchmarks: HashMap<String, MetricBenchmark>,
    labels: HashMap<String, String>,
    recommendations: HashMap<String, RecommendationSet>,
    generic: RecommendationSet,
}

impl MetricCatalog {
    /// Empty catalog; every metric is unbenchmarked and labelled by its key.
    pub fn empty() -> Self {
        Self {
            benchmarks: HashMap::new(),
            labels: HashMap::new(),
            recommendations: HashMap::new(),
            generic: RecommendationSet::generic(),
        }
    }

    pub fn with_benchmark(mut self, key: &str, benchmark: MetricBenchmark) -> Self {
        self.benchmarks.insert(key.to_string(), benchmark);
        self
    }

    pub fn with_label(mut self, key: &str, label: &str) -> Self {
        self.labels.insert(key.to_string(), label.to_string());
        self
    }

    pub fn with_recommendations(mut self, key: &str, set: RecommendationSet) -> Self {
        self.recommendations.insert(key.to_string(), set);
        self
    }

    /// Digital-marketing industry ranges used by the dashboard.
    pub fn industry_default() -> Self {
        use MetricKind::*;

        Self::empty()
            // Benchmarks
            .with_benchmark(
                "cvr",
                MetricBenchmark::new(Some(2.0), Some(10.0), "2–10% (leads), 1–5% (sales)", &[Percentage]),
            )
            .with_benchmark("cpl", MetricBenchmark::new(None, Some(50.0), "$1–50", &[Cost]))
            .with_benchmark(
                "ctr",
                MetricBenchmark::new(Some(0.5), Some(2.0), "0.5–2% (social); 2–5% (search)", &[Percentage]),
            )
            .with_benchmark(
                "engagement_rate",
                MetricBenchmark::new(Some(0.5), Some(5.0), "0.5–5%", &[Percentage]),
            )
            .with_benchmark(
                "bounce_rate",
                MetricBenchmark::new(Some(40.0), Some(65.0), "40–65%", &[Percentage, InvertedPolarity]),
            )
            .with_benchmark("cpa", MetricBenchmark::new(None, Some(100.0), "$5–100", &[Cost]))
            .with_benchmark("roas", MetricBenchmark::new(Some(2.0), None, "2x+", &[Ratio]))
            .with_benchmark(
                "aov",
                MetricBenchmark::new(Some(50.0), Some(150.0), "$50–$150", &[Monetary]),
            )
            // Labels
            .with_label("leads", "Leads")
            .with_label("cvr", "Conversion Rate (%)")
            .with_label("cpl", "Cost per Lead ($)")
            .with_label("ctr", "Click-Through Rate (%)")
            .with_label("impressions", "Impressions")
            .with_label("engagement_rate", "Engagement Rate (%)")
            .with_label("bounce_rate", "Bounce Rate (%)")
            .with_label("cpa", "Cost per Acquisition ($)")
            .with_label("roas", "Return on Ad Spend (x)")
            .with_label("aov", "Average Order Value ($)")
            // Recommendations
            .with_recommendations(
                "cvr",
                RecommendationSet::new(
                    "Test a clearer call-to-action, improve landing page design, and refine offer or audience targeting.",
                    "Your conversion rate is within industry norms. Keep optimizing copy and creative for incremental gains.",
                    "Excellent conversion—consider scaling spend to test new audiences.",
                ),
            )
            .with_recommendations(
                "cpl",
                RecommendationSet::new(
                    "High CPL: Try new creative, alternate placements, and refine audience parameters to reduce costs.",
                    "CPL is reasonable given volume; monitor as campaigns scale.",
                    "Low CPL! Consider reallocating extra budget to highest-performing segments.",
                ),
            )
            .with_recommendations(
                "ctr",
                RecommendationSet::new(
                    "Low CTR: Review headline and visuals. Test sharper messaging and stronger value props.",
                    "CTR is in a healthy range. Maintain creative rotation.",
                    "Excellent CTR! Try A/B testing for further lift.",
                ),
            )
            .with_recommendations(
                "cpa",
                RecommendationSet::new(
                    "High CPA: Optimize ad creative, test retargeting, or review bidding/budget allocations.",
                    "CPA looks solid—monitor quality of conversions.",
                    "Outstanding CPA, scale spend where possible.",
                ),
            )
            .with_recommendations(
                "roas",
                RecommendationSet::new(
                    "Low ROAS: Reassess creative and targeting. Try focusing on higher-value audiences or adjusting offers.",
                    "ROAS is good. Test incremental budget increases.",
                    "Great ROAS! Safely scale budget; consider duplicating best ad sets.",
                ),
            )
            .with_recommendations(
                "engagement_rate",
                RecommendationSet::new(
                    "Low engagement: Try more interactive formats, UGC, and call-outs for shares/comments.",
                    "Solid engagement—review top posts for repeatable patterns.",
                    "Great engagement; try retargeting recent engagers for conversions.",
                ),
            )
            .with_recommendations(
                "bounce_rate",
                RecommendationSet::new(
                    "Very low bounce (can be good, but check for event tracking accuracy).",
                    "Normal bounce rate. Keep optimizing page speed and design.",
                    "High bounce: Review landing page match to ad creative and make the next step immediately clear.",
                ),
            )
    }

    pub fn benchmark(&self, key: &str) -> Option<&MetricBenchmark> {
        self.benchmarks.get(key)
    }

    /// Display label, falling back to the uppercased key.
    pub fn label(&self, key: &str) -> String {
        self.labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_uppercase())
    }

    /// Recommendation copy, falling back to the generic triple.
    pub fn recommendations(&self, key: &str) -> &RecommendationSet {
        self.recommendations.get(key).unwrap_or(&self.generic)
    }

    /// Benchmarked metric keys, sorted for stable listings.
    pub fn benchmarked_metrics(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.benchmarks.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for MetricCatalog {
    fn default() -> Self {
        Self::industry_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_catalog_covers_benchmarked_keys() {
        let catalog = MetricCatalog::industry_default();
        assert_eq!(
            catalog.benchmarked_metrics(),
            vec!["aov", "bounce_rate", "cpa", "cpl", "ctr", "cvr", "engagement_rate", "roas"]
        );
        for key in catalog.benchmarked_metrics() {
            let bench = catalog.benchmark(key).unwrap();
            assert!(bench.min.is_some() || bench.max.is_some(), "{key} has no bound");
        }
    }

    #[test]
    fn test_kind_tags() {
        let catalog = MetricCatalog::industry_default();
        let bounce = catalog.benchmark("bounce_rate").unwrap();
        assert!(bounce.is_percentage());
        assert!(bounce.is_inverted());

        let roas = catalog.benchmark("roas").unwrap();
        assert!(!roas.is_percentage());
        assert!(roas.has_kind(MetricKind::Ratio));
        assert_eq!(roas.max, None);
    }

    #[test]
    fn test_unit_follows_kind_tags() {
        let catalog = MetricCatalog::industry_default();
        let unit = |key: &str| catalog.benchmark(key).unwrap().unit();
        assert_eq!(unit("bounce_rate"), "%");
        assert_eq!(unit("cpl"), "$");
        assert_eq!(unit("aov"), "$");
        assert_eq!(unit("roas"), "x");
        let untagged = MetricBenchmark::new(Some(1.0), None, "1+", &[]);
        assert_eq!(untagged.unit(), "");
    }

    #[test]
    fn test_label_fallback_is_uppercase_key() {
        let catalog = MetricCatalog::industry_default();
        assert_eq!(catalog.label("impressions"), "Impressions");
        assert_eq!(catalog.label("video_views"), "VIDEO_VIEWS");
    }

    #[test]
    fn test_recommendation_fallback() {
        let catalog = MetricCatalog::industry_default();
        assert_eq!(catalog.recommendations("aov"), &RecommendationSet::generic());
        assert_eq!(
            catalog.recommendations("ctr").mid,
            "CTR is in a healthy range. Maintain creative rotation."
        );
    }
}
