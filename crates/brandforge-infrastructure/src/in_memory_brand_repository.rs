//! In-memory BrandRepository implementation.

use crate::mock::MockBehavior;
use crate::sample_data;
use brandforge_core::analytics::TimeRange;
use brandforge_core::brand::{
    Brand, BrandAnalyticsReport, BrandMetrics, BrandRepository, BrandStatus, BrandUpdate,
    MetricsGrowth, NewBrand, PerformanceSnapshot, TrendSummary,
};
use brandforge_core::error::{BrandforgeError, Result};
use async_trait::async_trait;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// A brand provider backed by an in-memory collection.
///
/// Starts from the seeded demo brands; fresh ids are assigned above the
/// seed range. Nothing survives the process.
pub struct InMemoryBrandRepository {
    brands: RwLock<Vec<Brand>>,
    next_id: AtomicU64,
    behavior: MockBehavior,
}

impl InMemoryBrandRepository {
    /// Creates a repository seeded with the demo brands.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::default())
    }

    /// Creates a seeded repository with custom latency/failure behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        let brands = sample_data::brands();
        let next_id = brands.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            brands: RwLock::new(brands),
            next_id: AtomicU64::new(next_id),
            behavior,
        }
    }

    /// Creates an empty repository (no seed data).
    pub fn empty(behavior: MockBehavior) -> Self {
        Self {
            brands: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            behavior,
        }
    }
}

impl Default for InMemoryBrandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn list(&self) -> Result<Vec<Brand>> {
        self.behavior.simulate("list brands").await?;
        Ok(self.brands.read().await.clone())
    }

    async fn get(&self, id: u64) -> Result<Brand> {
        self.behavior.simulate("get brand").await?;
        self.brands
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| BrandforgeError::not_found("brand", id.to_string()))
    }

    async fn create(&self, brand: NewBrand) -> Result<Brand> {
        self.behavior.simulate("create brand").await?;

        let now = chrono::Utc::now().to_rfc3339();
        let stored = Brand {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: brand.name,
            description: brand.description,
            industry: brand.industry,
            status: BrandStatus::Active,
            created_at: now.clone(),
            updated_at: now,
            metrics: BrandMetrics::default(),
            colors: brand.colors,
            archetype: brand.archetype,
            values: brand.values,
            target_audience: brand.target_audience,
            positioning: brand.positioning,
        };

        tracing::debug!(id = stored.id, name = %stored.name, "brand created");
        self.brands.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: u64, update: BrandUpdate) -> Result<Brand> {
        self.behavior.simulate("update brand").await?;

        let mut brands = self.brands.write().await;
        let brand = brands
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BrandforgeError::not_found("brand", id.to_string()))?;

        if let Some(name) = update.name {
            brand.name = name;
        }
        if let Some(description) = update.description {
            brand.description = description;
        }
        if let Some(industry) = update.industry {
            brand.industry = industry;
        }
        if let Some(status) = update.status {
            brand.status = status;
        }
        if let Some(colors) = update.colors {
            brand.colors = colors;
        }
        if let Some(archetype) = update.archetype {
            brand.archetype = archetype;
        }
        if let Some(values) = update.values {
            brand.values = values;
        }
        if let Some(target_audience) = update.target_audience {
            brand.target_audience = target_audience;
        }
        if let Some(positioning) = update.positioning {
            brand.positioning = positioning;
        }
        brand.updated_at = chrono::Utc::now().to_rfc3339();

        Ok(brand.clone())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.behavior.simulate("delete brand").await?;

        let mut brands = self.brands.write().await;
        let before = brands.len();
        brands.retain(|b| b.id != id);
        if brands.len() == before {
            return Err(BrandforgeError::not_found("brand", id.to_string()));
        }
        tracing::debug!(id, "brand deleted");
        Ok(())
    }

    async fn analytics(&self, id: u64, range: TimeRange) -> Result<BrandAnalyticsReport> {
        self.behavior.simulate("brand analytics").await?;

        let brand = {
            let brands = self.brands.read().await;
            brands
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .ok_or_else(|| BrandforgeError::not_found("brand", id.to_string()))?
        };

        let mut rng = rand::thread_rng();
        Ok(BrandAnalyticsReport {
            brand_id: id,
            time_range: range.to_string(),
            metrics: brand.metrics,
            growth: MetricsGrowth {
                brand_awareness: 12.5,
                market_share: 8.3,
                customer_satisfaction: 5.7,
                social_followers: 15.2,
                monthly_traffic: 18.9,
            },
            performance: PerformanceSnapshot {
                reach: rng.gen_range(50_000..150_000),
                impressions: rng.gen_range(200_000..700_000),
                engagement: rng.gen_range(5_000..15_000),
                conversions: rng.gen_range(500..1_500),
            },
            trends: TrendSummary {
                positive: vec![
                    "Increasing social engagement".to_string(),
                    "Growing brand awareness".to_string(),
                ],
                negative: vec![
                    "Declining conversion rate".to_string(),
                    "Increased competitor activity".to_string(),
                ],
                neutral: vec![
                    "Stable market share".to_string(),
                    "Consistent customer satisfaction".to_string(),
                ],
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryBrandRepository {
        InMemoryBrandRepository::with_behavior(MockBehavior::instant())
    }

    #[tokio::test]
    async fn test_seeded_listing() {
        let brands = repo().list().await.unwrap();
        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0].name, "TechFlow Solutions");
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_zeroed_metrics() {
        let repo = repo();
        let created = repo
            .create(NewBrand {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.status, BrandStatus::Active);
        assert_eq!(created.metrics, BrandMetrics::default());
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let err = repo().get(999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_overwrites_present_fields_only() {
        let repo = repo();
        let updated = repo
            .update(
                1,
                BrandUpdate {
                    description: Some("Updated description".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "TechFlow Solutions");
        assert_eq!(updated.description, "Updated description");
    }

    #[tokio::test]
    async fn test_delete_then_get_misses() {
        let repo = repo();
        repo.delete(1).await.unwrap();
        assert!(repo.get(1).await.unwrap_err().is_not_found());
        assert!(repo.delete(1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_analytics_ranges_and_miss() {
        let repo = repo();
        let report = repo.analytics(1, TimeRange::Last30Days).await.unwrap();
        assert_eq!(report.time_range, "30d");
        assert!((50_000..150_000).contains(&report.performance.reach));
        assert!((500..1_500).contains(&report.performance.conversions));

        assert!(repo
            .analytics(999, TimeRange::Last7Days)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_injected_failure_does_not_mutate() {
        let repo = InMemoryBrandRepository::with_behavior(
            MockBehavior::instant().with_failure_rate(1.0),
        );
        let err = repo
            .create(NewBrand {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        // Collection is untouched by the failed call.
        let ok_repo = InMemoryBrandRepository::with_behavior(MockBehavior::instant());
        assert_eq!(ok_repo.list().await.unwrap().len(), 2);
    }
}
