//! Performance data CSV template: download template and first-row import.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lowercase headers of the downloadable template, in column order.
pub const CSV_TEMPLATE_HEADERS: [&str; 6] = [
    "date",
    "campaign_name",
    "impressions",
    "clicks",
    "spend",
    "conversions",
];

const SAMPLE_ROW: &str = "2024-01-01,Campaign A,10000,500,200,50";

/// Contents of `performance_template.csv`.
pub fn template() -> String {
    format!("{}\n{}\n", CSV_TEMPLATE_HEADERS.join(","), SAMPLE_ROW)
}

/// Manually entered (or imported) campaign performance numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ManualPerformanceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversions: Option<f64>,
}

impl ManualPerformanceData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn set(&mut self, header: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        let number = || value.parse::<f64>().ok().filter(|n| n.is_finite());
        match header {
            "date" => self.date = Some(value.to_string()),
            "campaign_name" => self.campaign_name = Some(value.to_string()),
            "impressions" => self.impressions = number(),
            "clicks" => self.clicks = number(),
            "spend" => self.spend = number(),
            "conversions" => self.conversions = number(),
            _ => {}
        }
    }
}

/// Parse the header and first data row of an uploaded CSV.
///
/// Returns `None` when there is no data row, the row width differs from the
/// header, or no template column carried a usable value.
pub fn parse_performance_csv(text: &str) -> Option<ManualPerformanceData> {
    let mut lines = text.trim().lines();
    let headers: Vec<String> = lines
        .next()?
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();
    let values: Vec<&str> = lines.next()?.split(',').map(str::trim).collect();

    if values.len() != headers.len() {
        return None;
    }

    let mut data = ManualPerformanceData::default();
    for (header, value) in headers.iter().zip(values) {
        data.set(header, value);
    }

    (!data.is_empty()).then_some(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_round_trips_through_parser() {
        let data = parse_performance_csv(&template()).unwrap();
        assert_eq!(data.date.as_deref(), Some("2024-01-01"));
        assert_eq!(data.campaign_name.as_deref(), Some("Campaign A"));
        assert_eq!(data.impressions, Some(10000.0));
        assert_eq!(data.conversions, Some(50.0));
    }

    #[test]
    fn test_header_only_is_rejected() {
        assert!(parse_performance_csv("date,clicks\n").is_none());
        assert!(parse_performance_csv("").is_none());
    }

    #[test]
    fn test_mismatched_width_is_rejected() {
        assert!(parse_performance_csv("clicks,spend\n10\n").is_none());
    }

    #[test]
    fn test_headers_are_normalized_and_unknown_columns_ignored() {
        let data = parse_performance_csv(" Clicks , SPEND ,Region\r\n 42 , abc , EU\r\n").unwrap();
        assert_eq!(data.clicks, Some(42.0));
        assert_eq!(data.spend, None);
        assert!(data.date.is_none());
    }

    #[test]
    fn test_no_known_values_is_rejected() {
        assert!(parse_performance_csv("region,channel\nEU,email\n").is_none());
    }
}
