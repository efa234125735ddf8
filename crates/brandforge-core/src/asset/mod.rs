//! Asset library domain module.
//!
//! # Module Structure
//!
//! - `model`: Asset entity, query/filtering types, pagination
//! - `repository`: Repository trait for the asset library

mod model;
mod repository;

// Re-export public API
pub use model::{
    Asset, AssetCategory, AssetKind, AssetPage, AssetQuery, AssetSortField, NewAsset,
    Pagination, SortOrder,
};
pub use repository::AssetRepository;
