//! In-memory DashboardRepository implementation.

use crate::mock::MockBehavior;
use crate::sample_data;
use brandforge_core::brand::BrandRepository;
use brandforge_core::dashboard::{DashboardRepository, DashboardSummary};
use brandforge_core::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Dashboard provider combining the canned summary with the live brand
/// collection.
pub struct InMemoryDashboardRepository {
    brands: Arc<dyn BrandRepository>,
    behavior: MockBehavior,
}

impl InMemoryDashboardRepository {
    /// Creates a dashboard over the given brand provider.
    pub fn new(brands: Arc<dyn BrandRepository>) -> Self {
        Self::with_behavior(brands, MockBehavior::default())
    }

    /// Creates a dashboard with custom latency/failure behavior.
    pub fn with_behavior(brands: Arc<dyn BrandRepository>, behavior: MockBehavior) -> Self {
        Self { brands, behavior }
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepository {
    async fn summary(&self) -> Result<DashboardSummary> {
        self.behavior.simulate("dashboard summary").await?;

        let mut summary = sample_data::dashboard();
        summary.stats.total_brands = self.brands.list().await?.len();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory_brand_repository::InMemoryBrandRepository;
    use brandforge_core::brand::NewBrand;

    #[tokio::test]
    async fn test_summary_reflects_live_brand_count() {
        let brands = Arc::new(InMemoryBrandRepository::with_behavior(
            MockBehavior::instant(),
        ));
        let dashboard =
            InMemoryDashboardRepository::with_behavior(brands.clone(), MockBehavior::instant());

        let summary = dashboard.summary().await.unwrap();
        assert_eq!(summary.stats.total_brands, 2);
        assert_eq!(summary.recent_activity.len(), 4);
        assert_eq!(summary.upcoming_tasks.len(), 3);

        brands
            .create(NewBrand {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let summary = dashboard.summary().await.unwrap();
        assert_eq!(summary.stats.total_brands, 3);
    }
}
