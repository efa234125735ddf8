//! Analytics provider trait.

use super::model::{
    AnalyticsOverview, BrandPerformance, ChannelPerformance, CompetitorComparison,
    ContentPerformance, DemographicsBreakdown, TimeRange,
};
use crate::error::Result;

/// An abstract provider for analytics read models.
///
/// All operations are read-only; implementations generate or serve the data
/// from their own collections.
#[async_trait::async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Headline numbers across all brands.
    async fn overview(&self) -> Result<AnalyticsOverview>;

    /// Daily metric series for the requested window.
    async fn brand_performance(&self, range: TimeRange) -> Result<BrandPerformance>;

    /// Your brand scored against the top competitor.
    async fn competitor_comparison(&self) -> Result<CompetitorComparison>;

    /// Audience demographic breakdown.
    async fn demographics(&self) -> Result<DemographicsBreakdown>;

    /// Per-channel funnel numbers.
    async fn channel_performance(&self) -> Result<Vec<ChannelPerformance>>;

    /// Per-content engagement numbers.
    async fn content_performance(&self) -> Result<Vec<ContentPerformance>>;
}
