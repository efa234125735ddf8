//! Asset repository trait.
//!
//! Defines the interface for the asset library.

use super::model::{Asset, AssetPage, AssetQuery, NewAsset};
use crate::error::Result;

/// An abstract provider for the asset library.
#[async_trait::async_trait]
pub trait AssetRepository: Send + Sync {
    /// Lists assets matching the query, sorted and paginated.
    async fn query(&self, query: AssetQuery) -> Result<AssetPage>;

    /// Retrieves an asset by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no asset has the given id.
    async fn get(&self, id: u64) -> Result<Asset>;

    /// Adds an asset to the library and returns the stored record.
    async fn create(&self, asset: NewAsset) -> Result<Asset>;

    /// Removes an asset from the library.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no asset has the given id.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Marks an asset as selected or unselected in the library view.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no asset has the given id.
    async fn set_selected(&self, id: u64, selected: bool) -> Result<Asset>;
}
