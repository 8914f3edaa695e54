//! Campaign performance reporting: industry benchmarks, per-metric
//! evaluation, report aggregation and performance-data import.

pub mod analyzer;
pub mod benchmarks;
pub mod csv_template;
pub mod evaluator;

pub use analyzer::PerformanceAnalyzer;
pub use benchmarks::{MetricBenchmark, MetricCatalog, MetricKind, RecommendationSet};
pub use csv_template::{parse_performance_csv, ManualPerformanceData};
pub use evaluator::{MetricEvaluation, MetricEvaluator};
