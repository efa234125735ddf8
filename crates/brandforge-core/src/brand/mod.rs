//! Brand domain module.
//!
//! # Module Structure
//!
//! - `model`: Brand entity and analytics read models
//! - `repository`: Repository trait for brand persistence

mod model;
mod repository;

// Re-export public API
pub use model::{
    Brand, BrandAnalyticsReport, BrandColors, BrandMetrics, BrandStatus, BrandUpdate,
    MetricsGrowth, NewBrand, PerformanceSnapshot, TrendSummary,
};
pub use repository::BrandRepository;
