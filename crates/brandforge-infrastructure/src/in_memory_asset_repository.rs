//! In-memory AssetRepository implementation.

use crate::mock::MockBehavior;
use crate::sample_data;
use brandforge_core::asset::{
    Asset, AssetPage, AssetQuery, AssetRepository, AssetSortField, NewAsset, Pagination,
    SortOrder,
};
use brandforge_core::error::{BrandforgeError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// An asset library backed by an in-memory collection.
pub struct InMemoryAssetRepository {
    assets: RwLock<Vec<Asset>>,
    next_id: AtomicU64,
    behavior: MockBehavior,
}

impl InMemoryAssetRepository {
    /// Creates a library seeded with the demo assets.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::default())
    }

    /// Creates a seeded library with custom latency/failure behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        let assets = sample_data::assets();
        let next_id = assets.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            assets: RwLock::new(assets),
            next_id: AtomicU64::new(next_id),
            behavior,
        }
    }
}

impl Default for InMemoryAssetRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the query's filters to one asset.
fn matches(asset: &Asset, query: &AssetQuery) -> bool {
    if let Some(kind) = query.kind {
        if asset.kind != kind {
            return false;
        }
    }
    if let Some(category) = query.category {
        if asset.category != category {
            return false;
        }
    }
    if !query.search.is_empty() {
        let needle = query.search.to_lowercase();
        let name_hit = asset.name.to_lowercase().contains(&needle);
        let tag_hit = asset.tags.iter().any(|t| t.to_lowercase().contains(&needle));
        if !name_hit && !tag_hit {
            return false;
        }
    }
    true
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn query(&self, query: AssetQuery) -> Result<AssetPage> {
        self.behavior.simulate("query assets").await?;

        let assets = self.assets.read().await;
        let mut filtered: Vec<Asset> = assets
            .iter()
            .filter(|a| matches(a, &query))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| {
            let ordering = match query.sort_by {
                AssetSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                AssetSortField::Name => a.name.cmp(&b.name),
            };
            match query.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = filtered.len();
        let limit = query.limit.max(1);
        let page = query.page.max(1);
        let total_pages = total.div_ceil(limit);
        let start = (page - 1) * limit;
        let paged: Vec<Asset> = filtered.into_iter().skip(start).take(limit).collect();

        Ok(AssetPage {
            assets: paged,
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages,
            },
        })
    }

    async fn get(&self, id: u64) -> Result<Asset> {
        self.behavior.simulate("get asset").await?;
        self.assets
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| BrandforgeError::not_found("asset", id.to_string()))
    }

    async fn create(&self, asset: NewAsset) -> Result<Asset> {
        self.behavior.simulate("create asset").await?;

        let now = chrono::Utc::now().to_rfc3339();
        let stored = Asset {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: asset.name,
            kind: asset.kind,
            category: asset.category,
            format: asset.format,
            size: asset.size,
            tags: asset.tags,
            created_at: now.clone(),
            updated_at: now,
            selected: false,
        };

        tracing::debug!(id = stored.id, name = %stored.name, "asset created");
        self.assets.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.behavior.simulate("delete asset").await?;

        let mut assets = self.assets.write().await;
        let before = assets.len();
        assets.retain(|a| a.id != id);
        if assets.len() == before {
            return Err(BrandforgeError::not_found("asset", id.to_string()));
        }
        Ok(())
    }

    async fn set_selected(&self, id: u64, selected: bool) -> Result<Asset> {
        self.behavior.simulate("select asset").await?;

        let mut assets = self.assets.write().await;
        let asset = assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| BrandforgeError::not_found("asset", id.to_string()))?;
        asset.selected = selected;
        asset.updated_at = chrono::Utc::now().to_rfc3339();
        Ok(asset.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandforge_core::asset::{AssetCategory, AssetKind};

    fn repo() -> InMemoryAssetRepository {
        InMemoryAssetRepository::with_behavior(MockBehavior::instant())
    }

    #[tokio::test]
    async fn test_default_query_sorts_newest_first() {
        let page = repo().query(AssetQuery::default()).await.unwrap();
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.assets[0].name, "Primary Logo");
        assert_eq!(page.assets.last().unwrap().name, "Brand Color Palette");
    }

    #[tokio::test]
    async fn test_kind_and_category_filters() {
        let repo = repo();

        let page = repo
            .query(AssetQuery {
                kind: Some(AssetKind::Logo),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.assets[0].name, "Primary Logo");

        let page = repo
            .query(AssetQuery {
                category: Some(AssetCategory::Brand),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 2);
    }

    #[tokio::test]
    async fn test_search_matches_name_and_tags() {
        let repo = repo();

        let page = repo
            .query(AssetQuery {
                search: "banner".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.assets[0].name, "Social Media Banner");

        // Tag-only hit.
        let page = repo
            .query(AssetQuery {
                search: "palette".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_pagination() {
        let repo = repo();
        let page = repo
            .query(AssetQuery {
                limit: 2,
                page: 2,
                sort_by: AssetSortField::Name,
                sort_order: SortOrder::Asc,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.assets.len(), 2);

        // Past-the-end pages are empty, not an error.
        let page = repo
            .query(AssetQuery {
                limit: 2,
                page: 9,
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(page.assets.is_empty());
    }

    #[tokio::test]
    async fn test_create_get_select_delete() {
        let repo = repo();
        let created = repo
            .create(NewAsset {
                name: "Launch Deck".to_string(),
                kind: AssetKind::Presentation,
                category: AssetCategory::Marketing,
                format: "pptx".to_string(),
                size: "5.0 MB".to_string(),
                tags: vec!["deck".to_string()],
            })
            .await
            .unwrap();
        assert_eq!(created.id, 6);
        assert!(!created.selected);

        let selected = repo.set_selected(created.id, true).await.unwrap();
        assert!(selected.selected);

        repo.delete(created.id).await.unwrap();
        assert!(repo.get(created.id).await.unwrap_err().is_not_found());
    }
}
