//! Metric evaluator: classifies one metric against its industry benchmark,
//! compares it with the prior period and produces recommendation copy.

use crate::benchmarks::{MetricBenchmark, MetricCatalog};
use campaign_core::performance::{MetricFlag, MetricStatus, TrendLabel};
use std::fmt;
use std::sync::Arc;

const NOT_BENCHMARKED_MESSAGE: &str = "No available industry comparison for this metric.";
const NOT_BENCHMARKED_NOTE: &str = "N/A";

// ─── Classification ─────────────────────────────────────────────────────────

/// Position of a value relative to its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Below benchmark (or above it for inverted metrics).
    Low,
    /// Within benchmark.
    Mid,
    /// Beating the benchmark.
    Good,
}

impl Classification {
    pub fn status(self) -> MetricStatus {
        match self {
            Classification::Low => MetricStatus::NeedsAttention,
            Classification::Mid => MetricStatus::OnTarget,
            Classification::Good => MetricStatus::Excellent,
        }
    }

    pub fn flag(self) -> MetricFlag {
        match self {
            Classification::Low => MetricFlag::Warning,
            Classification::Mid => MetricFlag::OnTarget,
            Classification::Good => MetricFlag::Good,
        }
    }
}

// ─── Trend ──────────────────────────────────────────────────────────────────

/// Direction token of the period-over-period comparison. Inverted-polarity
/// metrics swap `Up` and `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn label(self) -> TrendLabel {
        match self {
            TrendDirection::Up => TrendLabel::Improved,
            TrendDirection::Down => TrendLabel::Declined,
            TrendDirection::Flat => TrendLabel::NoChange,
        }
    }
}

/// Wording used inside recommendation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSentiment {
    Improved,
    Worsened,
}

impl fmt::Display for TrendSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendSentiment::Improved => f.write_str("improved"),
            TrendSentiment::Worsened => f.write_str("worsened"),
        }
    }
}

// ─── Evaluation ─────────────────────────────────────────────────────────────

/// Outcome of evaluating a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEvaluation {
    pub status: MetricStatus,
    pub flag: MetricFlag,
    pub message: String,
    pub benchmark: String,
    pub trend: Option<TrendLabel>,
}

impl MetricEvaluation {
    fn not_benchmarked() -> Self {
        Self {
            status: MetricStatus::NotBenchmarked,
            flag: MetricFlag::OnTarget,
            message: NOT_BENCHMARKED_MESSAGE.to_string(),
            benchmark: NOT_BENCHMARKED_NOTE.to_string(),
            trend: None,
        }
    }
}

/// Stateless evaluator over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct MetricEvaluator {
    catalog: Arc<MetricCatalog>,
}

impl MetricEvaluator {
    pub fn new(catalog: Arc<MetricCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    /// Evaluate `current` (and optionally `past`) for `metric`. Never fails.
    pub fn evaluate(&self, metric: &str, current: f64, past: Option<f64>) -> MetricEvaluation {
        let Some(bench) = self.catalog.benchmark(metric) else {
            return MetricEvaluation::not_benchmarked();
        };

        let value = normalize_current(bench, current);
        let class = classify(bench, value);
        let direction = past
            .filter(|p| !p.is_nan())
            .map(|p| trend_direction(bench, value, normalize_past(bench, p)));

        let recs = self.catalog.recommendations(metric);
        let mut message = match class {
            Classification::Low => recs.low.clone(),
            Classification::Mid => recs.mid.clone(),
            Classification::Good => recs.high.clone(),
        };
        if let Some(direction) = direction {
            message.push_str(&trend_clause(class, direction, sentiment(bench, direction)));
        }

        MetricEvaluation {
            status: class.status(),
            flag: class.flag(),
            message,
            benchmark: bench.note.clone(),
            trend: direction.map(TrendDirection::label),
        }
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// Percentages may arrive as `4.5` or `0.045`. Values in `(1, 100]` are
/// already percentages; `[0, 1]` is scaled up, so `1` reads as 100%.
/// Anything else passes through.
pub fn normalize_current(bench: &MetricBenchmark, value: f64) -> f64 {
    if !bench.is_percentage() {
        return value;
    }
    if value > 1.0 && value <= 100.0 {
        value
    } else if (0.0..=1.0).contains(&value) {
        value * 100.0
    } else {
        value
    }
}

/// Prior-period values are only scaled when they lie in `[0, 1]`, so a past
/// value of exactly `1` becomes `100`.
pub fn normalize_past(bench: &MetricBenchmark, value: f64) -> f64 {
    if bench.is_percentage() && (0.0..=1.0).contains(&value) {
        value * 100.0
    } else {
        value
    }
}

pub fn classify(bench: &MetricBenchmark, value: f64) -> Classification {
    if bench.is_inverted() {
        if bench.max.is_some_and(|max| value > max) {
            return Classification::Low;
        }
        if bench.min.is_some_and(|min| value < min) {
            return Classification::Good;
        }
        return Classification::Mid;
    }

    if bench.min.is_some_and(|min| value < min) {
        return Classification::Low;
    }
    // Exceeding the upper bound counts as excellent (CTR, ROAS, ...).
    if bench.max.is_some_and(|max| value > max) {
        return Classification::Good;
    }
    match (bench.min, bench.max) {
        (Some(min), Some(max)) if value >= min && value <= max => Classification::Mid,
        (Some(min), None) if value >= min => Classification::Good,
        (None, Some(max)) if value <= max => Classification::Mid,
        _ => Classification::Low,
    }
}

pub fn trend_direction(bench: &MetricBenchmark, current: f64, past: f64) -> TrendDirection {
    let (rising, falling) = if bench.is_inverted() {
        (TrendDirection::Down, TrendDirection::Up)
    } else {
        (TrendDirection::Up, TrendDirection::Down)
    };
    if current > past {
        rising
    } else if current < past {
        falling
    } else {
        TrendDirection::Flat
    }
}

/// Message wording for a direction token. Note that `Flat` reads as
/// "worsened" (or "improved" for inverted metrics).
pub fn sentiment(bench: &MetricBenchmark, direction: TrendDirection) -> TrendSentiment {
    match (direction, bench.is_inverted()) {
        (TrendDirection::Up, false) => TrendSentiment::Improved,
        (TrendDirection::Up, true) => TrendSentiment::Worsened,
        (_, false) => TrendSentiment::Worsened,
        (_, true) => TrendSentiment::Improved,
    }
}

fn trend_clause(
    class: Classification,
    direction: TrendDirection,
    sentiment: TrendSentiment,
) -> String {
    match (class, sentiment) {
        (Classification::Good, TrendSentiment::Improved) => {
            format!(" You've {sentiment} over the last period—great!")
        }
        (Classification::Low, TrendSentiment::Worsened) => {
            format!(" The trend is {sentiment}—take action soon.")
        }
        (Classification::Low, _) if direction == TrendDirection::Flat => {
            " Performance is flat, suggesting this remains a problem area.".to_string()
        }
        _ => format!(" Trend: {sentiment}."),
    }
}
