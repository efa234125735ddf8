//! Brand repository trait.
//!
//! Defines the interface for brand read/write operations.

use super::model::{Brand, BrandAnalyticsReport, BrandUpdate, NewBrand};
use crate::analytics::TimeRange;
use crate::error::Result;

/// An abstract provider for brand records.
///
/// This trait defines the contract for reading and mutating brands,
/// decoupling the application's core logic from the specific backing store
/// (in-memory mock, database, remote API).
///
/// # Implementation Notes
///
/// Implementations should:
/// - Assign entity ids on `create`
/// - Map lookup misses to `BrandforgeError::NotFound`
/// - Surface transient failures as `BrandforgeError::Provider`
#[async_trait::async_trait]
pub trait BrandRepository: Send + Sync {
    /// Retrieves all brands.
    async fn list(&self) -> Result<Vec<Brand>>;

    /// Retrieves a brand by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no brand has the given id.
    async fn get(&self, id: u64) -> Result<Brand>;

    /// Creates a brand and returns the stored record.
    async fn create(&self, brand: NewBrand) -> Result<Brand>;

    /// Applies a partial update and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no brand has the given id.
    async fn update(&self, id: u64, update: BrandUpdate) -> Result<Brand>;

    /// Deletes a brand.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no brand has the given id.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Builds the per-brand analytics report for a time range.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no brand has the given id.
    async fn analytics(&self, id: u64, range: TimeRange) -> Result<BrandAnalyticsReport>;
}
