//! Asset library domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of design asset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AssetKind {
    Logo,
    BusinessCard,
    SocialMedia,
    Letterhead,
    ColorPalette,
    Presentation,
    EmailSignature,
    Marketing,
}

/// Library category an asset is filed under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetCategory {
    Brand,
    Marketing,
    Social,
    Stationery,
}

/// A design asset in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: u64,
    pub name: String,
    pub kind: AssetKind,
    pub category: AssetCategory,
    /// File format, e.g. "svg" or "pdf".
    pub format: String,
    /// Human-readable size, e.g. "2.4 MB".
    pub size: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub selected: bool,
}

/// Payload for adding an asset to the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub kind: AssetKind,
    pub category: AssetCategory,
    pub format: String,
    pub size: String,
    pub tags: Vec<String>,
}

/// Field the library listing can be sorted by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AssetSortField {
    CreatedAt,
    Name,
}

/// Listing sort direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Filter, sort and pagination parameters for the library listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuery {
    /// Restrict to one asset kind; `None` lists all kinds.
    pub kind: Option<AssetKind>,
    /// Restrict to one category; `None` lists all categories.
    pub category: Option<AssetCategory>,
    /// Case-insensitive substring match against name and tags.
    pub search: String,
    /// 1-based page number.
    pub page: usize,
    pub limit: usize,
    pub sort_by: AssetSortField,
    pub sort_order: SortOrder,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            kind: None,
            category: None,
            search: String::new(),
            page: 1,
            limit: 10,
            sort_by: AssetSortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Pagination metadata for a listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One page of the asset library listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPage {
    pub assets: Vec<Asset>,
    pub pagination: Pagination,
}
