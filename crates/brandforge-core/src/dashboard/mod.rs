//! Dashboard domain module.
//!
//! # Module Structure
//!
//! - `model`: Dashboard summary read model
//! - `repository`: Repository trait for the dashboard

mod model;
mod repository;

// Re-export public API
pub use model::{
    ActivityItem, ActivityKind, BrandHighlight, DashboardStats, DashboardSummary,
    TaskPriority, UpcomingTask,
};
pub use repository::DashboardRepository;
