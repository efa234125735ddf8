//! Template-based asset generation.
//!
//! Turns a selection of asset templates into library entries for the
//! active brand, simulating the generation round-trip.

use brandforge_core::asset::{Asset, AssetCategory, AssetKind, AssetRepository, NewAsset};
use brandforge_core::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Simulated generation time for a batch of assets.
const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(3000);

/// A generatable asset template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTemplate {
    pub kind: AssetKind,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AssetCategory,
}

const TEMPLATES: [AssetTemplate; 6] = [
    AssetTemplate {
        kind: AssetKind::Logo,
        name: "Logo Concepts",
        description: "AI-generated logo variations",
        category: AssetCategory::Brand,
    },
    AssetTemplate {
        kind: AssetKind::BusinessCard,
        name: "Business Cards",
        description: "Professional business card templates",
        category: AssetCategory::Marketing,
    },
    AssetTemplate {
        kind: AssetKind::SocialMedia,
        name: "Social Media",
        description: "Headers, posts, and story templates",
        category: AssetCategory::Social,
    },
    AssetTemplate {
        kind: AssetKind::Presentation,
        name: "Presentations",
        description: "Slide deck templates",
        category: AssetCategory::Marketing,
    },
    AssetTemplate {
        kind: AssetKind::EmailSignature,
        name: "Email Signatures",
        description: "Professional email signatures",
        category: AssetCategory::Stationery,
    },
    AssetTemplate {
        kind: AssetKind::Marketing,
        name: "Marketing Materials",
        description: "Flyers, brochures, and ads",
        category: AssetCategory::Marketing,
    },
];

/// Generates library assets from the template catalog.
pub struct AssetGeneratorService {
    assets: Arc<dyn AssetRepository>,
    generation_delay: Duration,
}

impl AssetGeneratorService {
    /// Creates a generator over the given asset library.
    pub fn new(assets: Arc<dyn AssetRepository>) -> Self {
        Self {
            assets,
            generation_delay: DEFAULT_GENERATION_DELAY,
        }
    }

    /// Overrides the simulated generation delay.
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    /// The generatable templates, in catalog order.
    pub fn templates() -> &'static [AssetTemplate] {
        &TEMPLATES
    }

    /// Looks up the template for an asset kind.
    pub fn template_for(kind: AssetKind) -> Option<&'static AssetTemplate> {
        TEMPLATES.iter().find(|t| t.kind == kind)
    }

    /// Generates one asset per selected kind and stores them in the
    /// library. An empty selection generates nothing.
    ///
    /// # Errors
    ///
    /// Propagates the library's error if storing an asset fails; assets
    /// generated before the failure remain in the library.
    pub async fn generate(&self, kinds: &[AssetKind]) -> Result<Vec<Asset>> {
        if kinds.is_empty() {
            return Ok(Vec::new());
        }

        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        let mut generated = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let Some(template) = Self::template_for(*kind) else {
                tracing::warn!(kind = %kind, "no template for asset kind, skipping");
                continue;
            };
            let asset = self
                .assets
                .create(NewAsset {
                    name: format!("{} Design", template.name),
                    kind: template.kind,
                    category: template.category,
                    format: "png".to_string(),
                    size: "1.0 MB".to_string(),
                    tags: vec![kind.to_string(), "generated".to_string()],
                })
                .await?;
            generated.push(asset);
        }

        tracing::info!(count = generated.len(), "assets generated");
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandforge_core::asset::{AssetPage, AssetQuery, Pagination};
    use tokio::sync::RwLock;

    struct RecordingAssetRepository {
        created: RwLock<Vec<NewAsset>>,
    }

    #[async_trait::async_trait]
    impl AssetRepository for RecordingAssetRepository {
        async fn query(&self, query: AssetQuery) -> Result<AssetPage> {
            Ok(AssetPage {
                assets: Vec::new(),
                pagination: Pagination {
                    page: query.page,
                    limit: query.limit,
                    total: 0,
                    total_pages: 0,
                },
            })
        }

        async fn get(&self, id: u64) -> Result<Asset> {
            Err(brandforge_core::BrandforgeError::not_found(
                "asset",
                id.to_string(),
            ))
        }

        async fn create(&self, asset: NewAsset) -> Result<Asset> {
            let now = chrono::Utc::now().to_rfc3339();
            let stored = Asset {
                id: self.created.read().await.len() as u64 + 1,
                name: asset.name.clone(),
                kind: asset.kind,
                category: asset.category,
                format: asset.format.clone(),
                size: asset.size.clone(),
                tags: asset.tags.clone(),
                created_at: now.clone(),
                updated_at: now,
                selected: false,
            };
            self.created.write().await.push(asset);
            Ok(stored)
        }

        async fn delete(&self, _id: u64) -> Result<()> {
            Ok(())
        }

        async fn set_selected(&self, id: u64, _selected: bool) -> Result<Asset> {
            self.get(id).await
        }
    }

    #[tokio::test]
    async fn test_generate_creates_one_asset_per_kind() {
        let repo = Arc::new(RecordingAssetRepository {
            created: RwLock::new(Vec::new()),
        });
        let generator = AssetGeneratorService::new(repo.clone())
            .with_generation_delay(Duration::ZERO);

        let generated = generator
            .generate(&[AssetKind::Logo, AssetKind::SocialMedia])
            .await
            .unwrap();

        assert_eq!(generated.len(), 2);
        assert_eq!(generated[0].name, "Logo Concepts Design");
        assert_eq!(generated[1].category, AssetCategory::Social);
        assert_eq!(repo.created.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_selection_generates_nothing() {
        let repo = Arc::new(RecordingAssetRepository {
            created: RwLock::new(Vec::new()),
        });
        let generator =
            AssetGeneratorService::new(repo).with_generation_delay(Duration::ZERO);

        assert!(generator.generate(&[]).await.unwrap().is_empty());
    }

    #[test]
    fn test_catalog_covers_generatable_kinds() {
        assert_eq!(AssetGeneratorService::templates().len(), 6);
        assert!(AssetGeneratorService::template_for(AssetKind::Logo).is_some());
        assert!(AssetGeneratorService::template_for(AssetKind::ColorPalette).is_none());
    }
}
