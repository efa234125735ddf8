//! Analytics domain module.
//!
//! # Module Structure
//!
//! - `model`: Analytics read models (overview, time series, breakdowns)
//! - `provider`: Provider trait for analytics data

mod model;
mod provider;

// Re-export public API
pub use model::{
    AgeGroup, AnalyticsOverview, BrandPerformance, ChannelPerformance, ComparisonScores,
    CompetitorComparison, ContentPerformance, DemographicsBreakdown, DeviceShare,
    LocationShare, TimeRange, TimeSeriesPoint,
};
pub use provider::AnalyticsProvider;
