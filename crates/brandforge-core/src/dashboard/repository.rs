//! Dashboard repository trait.

use super::model::DashboardSummary;
use crate::error::Result;

/// An abstract provider for the dashboard read model.
#[async_trait::async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Builds the dashboard summary.
    ///
    /// Implementations should reflect the live brand collection in
    /// `stats.total_brands`.
    async fn summary(&self) -> Result<DashboardSummary>;
}
