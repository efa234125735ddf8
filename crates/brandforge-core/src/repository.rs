//! Repository trait re-exports.
//!
//! This module provides centralized access to all provider traits.

pub use crate::analytics::AnalyticsProvider;
pub use crate::asset::AssetRepository;
pub use crate::brand::BrandRepository;
pub use crate::competitor::CompetitorRepository;
pub use crate::dashboard::DashboardRepository;
