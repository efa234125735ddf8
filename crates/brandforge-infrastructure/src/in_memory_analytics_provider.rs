//! In-memory AnalyticsProvider implementation.

use crate::mock::MockBehavior;
use crate::sample_data;
use brandforge_core::analytics::{
    AnalyticsOverview, AnalyticsProvider, BrandPerformance, ChannelPerformance,
    CompetitorComparison, ContentPerformance, DemographicsBreakdown, TimeRange,
    TimeSeriesPoint,
};
use brandforge_core::error::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Base value and variance for one generated daily series.
struct SeriesShape {
    base: f64,
    variance: f64,
}

/// Analytics provider generating daily series around canned base values.
///
/// Series are produced from a seeded RNG held per provider, so a given
/// provider instance answers identically on every call.
pub struct InMemoryAnalyticsProvider {
    behavior: MockBehavior,
    seed: u64,
}

impl InMemoryAnalyticsProvider {
    /// Creates a provider with the default seed.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::default())
    }

    /// Creates a provider with custom latency/failure behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self { behavior, seed: 42 }
    }

    /// Overrides the RNG seed used for generated series.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates one daily series ending today.
    fn series(&self, rng: &mut StdRng, days: usize, shape: &SeriesShape) -> Vec<TimeSeriesPoint> {
        let today = Utc::now().date_naive();
        (0..days)
            .map(|offset| {
                let date = today - Duration::days((days - 1 - offset) as i64);
                let noise: f64 = rng.gen_range(-0.5..0.5);
                let value = (shape.base + noise * shape.variance).max(0.0).round() as u64;
                TimeSeriesPoint {
                    date: date.format("%Y-%m-%d").to_string(),
                    value,
                }
            })
            .collect()
    }

    /// Variance widens with the window, matching the canned report shapes.
    fn shapes(range: TimeRange) -> (SeriesShape, SeriesShape, SeriesShape) {
        let (awareness_var, engagement_var, conversion_var) = match range {
            TimeRange::Last7Days => (8.0, 400.0, 0.5),
            TimeRange::Last30Days => (12.0, 600.0, 0.8),
            TimeRange::Last90Days => (18.0, 800.0, 1.2),
        };
        (
            SeriesShape { base: 68.0, variance: awareness_var },
            SeriesShape { base: 3200.0, variance: engagement_var },
            SeriesShape { base: 3.2, variance: conversion_var },
        )
    }
}

impl Default for InMemoryAnalyticsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsProvider for InMemoryAnalyticsProvider {
    async fn overview(&self) -> Result<AnalyticsOverview> {
        self.behavior.simulate("analytics overview").await?;
        Ok(sample_data::analytics_overview())
    }

    async fn brand_performance(&self, range: TimeRange) -> Result<BrandPerformance> {
        self.behavior.simulate("brand performance").await?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let days = range.days();
        let (awareness, engagement, conversion) = Self::shapes(range);

        Ok(BrandPerformance {
            brand_awareness: self.series(&mut rng, days, &awareness),
            engagement: self.series(&mut rng, days, &engagement),
            conversion: self.series(&mut rng, days, &conversion),
        })
    }

    async fn competitor_comparison(&self) -> Result<CompetitorComparison> {
        self.behavior.simulate("competitor comparison").await?;
        Ok(sample_data::competitor_comparison())
    }

    async fn demographics(&self) -> Result<DemographicsBreakdown> {
        self.behavior.simulate("demographics").await?;
        Ok(sample_data::demographics())
    }

    async fn channel_performance(&self) -> Result<Vec<ChannelPerformance>> {
        self.behavior.simulate("channel performance").await?;
        Ok(sample_data::channel_performance())
    }

    async fn content_performance(&self) -> Result<Vec<ContentPerformance>> {
        self.behavior.simulate("content performance").await?;
        Ok(sample_data::content_performance())
    }
}
