//! Brand domain model.

use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle status of a brand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BrandStatus {
    Active,
    Draft,
    Archived,
}

/// Headline performance metrics tracked per brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMetrics {
    pub brand_awareness: u32,
    pub market_share: f64,
    pub customer_satisfaction: f64,
    pub social_followers: u64,
    pub monthly_traffic: u64,
}

/// Brand color tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// A brand record.
///
/// Lives in an in-memory collection owned by its provider; created on
/// demand and never persisted beyond process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub status: BrandStatus,
    pub created_at: String,
    pub updated_at: String,
    pub metrics: BrandMetrics,
    pub colors: BrandColors,
    pub archetype: String,
    pub values: Vec<String>,
    pub target_audience: String,
    pub positioning: String,
}

/// Payload for creating a brand. The provider assigns id, status,
/// timestamps and zeroed metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub colors: BrandColors,
    pub archetype: String,
    pub values: Vec<String>,
    pub target_audience: String,
    pub positioning: String,
}

impl NewBrand {
    /// Builds a brand creation payload from a composed strategy, the way
    /// wizard completion persists its result.
    pub fn from_strategy(strategy: &Strategy) -> Self {
        let identity = &strategy.brand_identity;
        let palette = &strategy.archetype_profile.color_palette;
        let color = |index: usize| palette.get(index).cloned().unwrap_or_default();

        Self {
            name: identity.name.clone(),
            description: identity.description.clone(),
            industry: String::new(),
            colors: BrandColors {
                primary: color(0),
                secondary: color(1),
                accent: color(2),
            },
            archetype: identity.archetype.clone(),
            values: identity.values.clone(),
            target_audience: strategy.target_audience.primary.clone(),
            positioning: identity.positioning.clone(),
        }
    }
}

/// Partial brand update; only present fields are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub status: Option<BrandStatus>,
    pub colors: Option<BrandColors>,
    pub archetype: Option<String>,
    pub values: Option<Vec<String>>,
    pub target_audience: Option<String>,
    pub positioning: Option<String>,
}

/// Period-over-period growth percentages for the headline metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsGrowth {
    pub brand_awareness: f64,
    pub market_share: f64,
    pub customer_satisfaction: f64,
    pub social_followers: f64,
    pub monthly_traffic: f64,
}

/// Point-in-time funnel numbers for a reporting period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub reach: u64,
    pub impressions: u64,
    pub engagement: u64,
    pub conversions: u64,
}

/// Qualitative trend callouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

/// Per-brand analytics report for a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandAnalyticsReport {
    pub brand_id: u64,
    pub time_range: String,
    pub metrics: BrandMetrics,
    pub growth: MetricsGrowth,
    pub performance: PerformanceSnapshot,
    pub trends: TrendSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Draft;
    use crate::strategy::{FixedChooser, StrategyComposer};

    #[test]
    fn test_new_brand_from_strategy_maps_identity() {
        let strategy = StrategyComposer::with_chooser(FixedChooser(0)).compose(&Draft::default());
        let new_brand = NewBrand::from_strategy(&strategy);

        assert_eq!(new_brand.name, "Your Brand");
        assert_eq!(new_brand.archetype, "The Innovator");
        assert_eq!(new_brand.colors.primary, "#6366F1");
        assert_eq!(new_brand.target_audience, "Tech-savvy professionals");
    }
}
