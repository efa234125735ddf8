//! Analytics read models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Reporting window for time-ranged analytics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    #[strum(serialize = "90d")]
    Last90Days,
}

impl TimeRange {
    /// Number of daily data points in this window.
    pub fn days(&self) -> usize {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        }
    }
}

/// Headline analytics numbers across all brands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_views: u64,
    pub unique_visitors: u64,
    pub conversion_rate: f64,
    pub brand_mentions: u64,
    pub social_engagement: u64,
    pub market_share: f64,
    pub brand_awareness: u32,
    pub customer_satisfaction: f64,
}

/// One daily sample of a tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// ISO date, e.g. "2024-01-20".
    pub date: String,
    pub value: u64,
}

/// Daily series for the tracked brand metrics over one time range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPerformance {
    pub brand_awareness: Vec<TimeSeriesPoint>,
    pub engagement: Vec<TimeSeriesPoint>,
    pub conversion: Vec<TimeSeriesPoint>,
}

/// Scored comparison axes (0-100 scale).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonScores {
    pub brand_strength: u32,
    pub market_share: u32,
    pub innovation: u32,
    pub customer_satisfaction: u32,
    pub digital_presence: u32,
}

/// Your brand scored against the strongest tracked competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorComparison {
    pub your_brand: ComparisonScores,
    pub top_competitor: ComparisonScores,
}

/// Audience share for one age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroup {
    pub group: String,
    pub percentage: u32,
}

/// Audience share for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationShare {
    pub country: String,
    pub percentage: u32,
}

/// Audience share for one device class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceShare {
    pub device: String,
    pub percentage: u32,
}

/// Demographic breakdown of the audience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsBreakdown {
    pub age_groups: Vec<AgeGroup>,
    pub locations: Vec<LocationShare>,
    pub devices: Vec<DeviceShare>,
}

/// Funnel numbers for one marketing channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPerformance {
    pub channel: String,
    pub visitors: u64,
    pub conversions: u64,
    pub roi: u32,
}

/// Engagement numbers for one piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPerformance {
    pub title: String,
    pub views: u64,
    pub engagement: f64,
    pub shares: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parsing() {
        assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::Last7Days);
        assert_eq!("30d".parse::<TimeRange>().unwrap(), TimeRange::Last30Days);
        assert_eq!("90d".parse::<TimeRange>().unwrap(), TimeRange::Last90Days);
        assert!("1y".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_time_range_days() {
        assert_eq!(TimeRange::Last7Days.days(), 7);
        assert_eq!(TimeRange::default().days(), 30);
    }
}
