//! In-memory CompetitorRepository implementation.

use crate::mock::MockBehavior;
use crate::sample_data;
use brandforge_core::competitor::{
    Competitor, CompetitiveMatrix, CompetitorMetrics, CompetitorRepository, MatrixRow,
    NewCompetitor,
};
use brandforge_core::error::{BrandforgeError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// A competitor tracker backed by an in-memory collection.
pub struct InMemoryCompetitorRepository {
    competitors: RwLock<Vec<Competitor>>,
    next_id: AtomicU64,
    behavior: MockBehavior,
}

impl InMemoryCompetitorRepository {
    /// Creates a repository seeded with the demo competitors.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::default())
    }

    /// Creates a seeded repository with custom latency/failure behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        let competitors = sample_data::competitors();
        let next_id = competitors.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            competitors: RwLock::new(competitors),
            next_id: AtomicU64::new(next_id),
            behavior,
        }
    }
}

impl Default for InMemoryCompetitorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompetitorRepository for InMemoryCompetitorRepository {
    async fn list(&self) -> Result<Vec<Competitor>> {
        self.behavior.simulate("list competitors").await?;
        Ok(self.competitors.read().await.clone())
    }

    async fn get(&self, id: u64) -> Result<Competitor> {
        self.behavior.simulate("get competitor").await?;
        self.competitors
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| BrandforgeError::not_found("competitor", id.to_string()))
    }

    async fn create(&self, competitor: NewCompetitor) -> Result<Competitor> {
        self.behavior.simulate("create competitor").await?;

        let stored = Competitor {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: competitor.name,
            industry: competitor.industry,
            market_share: competitor.market_share,
            brand_strength: competitor.brand_strength,
            social_followers: competitor.social_followers,
            monthly_traffic: competitor.monthly_traffic,
            key_strengths: competitor.key_strengths,
            weaknesses: competitor.weaknesses,
            recent_news: Vec::new(),
            metrics: CompetitorMetrics::default(),
        };

        tracing::debug!(id = stored.id, name = %stored.name, "competitor added to tracking");
        self.competitors.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.behavior.simulate("delete competitor").await?;

        let mut competitors = self.competitors.write().await;
        let before = competitors.len();
        competitors.retain(|c| c.id != id);
        if competitors.len() == before {
            return Err(BrandforgeError::not_found("competitor", id.to_string()));
        }
        tracing::debug!(id, "competitor removed from tracking");
        Ok(())
    }

    async fn matrix(&self) -> Result<CompetitiveMatrix> {
        self.behavior.simulate("competitive matrix").await?;

        // Seed matrix rows for seeded competitors; competitors added later
        // get a neutral row derived from their strength score.
        let seeded = sample_data::matrix();
        let competitors = self.competitors.read().await;

        let mut rows: Vec<MatrixRow> = Vec::new();
        for competitor in competitors.iter() {
            let row = seeded
                .rows
                .iter()
                .find(|r| r.competitor_id == Some(competitor.id))
                .cloned()
                .unwrap_or_else(|| MatrixRow {
                    competitor_id: Some(competitor.id),
                    name: competitor.name.clone(),
                    scores: vec![competitor.brand_strength; seeded.categories.len()],
                });
            rows.push(row);
        }
        // The user's own brand always closes the matrix.
        if let Some(own) = seeded.own_brand_row() {
            rows.push(own.clone());
        }

        Ok(CompetitiveMatrix {
            categories: seeded.categories,
            rows,
        })
    }
}
