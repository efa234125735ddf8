//! In-memory provider implementations for the Brandforge engine.
//!
//! Every provider in this crate serves a seeded in-memory collection with
//! simulated request latency, standing in for a real backend. Transient
//! failures can be injected through [`MockBehavior`] to exercise retry
//! paths.

pub mod in_memory_analytics_provider;
pub mod in_memory_asset_repository;
pub mod in_memory_brand_repository;
pub mod in_memory_competitor_repository;
pub mod in_memory_dashboard_repository;
pub mod in_memory_settings_service;
pub mod mock;
pub mod sample_data;

pub use in_memory_analytics_provider::InMemoryAnalyticsProvider;
pub use in_memory_asset_repository::InMemoryAssetRepository;
pub use in_memory_brand_repository::InMemoryBrandRepository;
pub use in_memory_competitor_repository::InMemoryCompetitorRepository;
pub use in_memory_dashboard_repository::InMemoryDashboardRepository;
pub use in_memory_settings_service::InMemorySettingsService;
pub use mock::MockBehavior;
