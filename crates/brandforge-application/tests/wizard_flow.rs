//! End-to-end wizard flow tests against the in-memory providers.

use brandforge_application::WizardUseCase;
use brandforge_core::brand::BrandRepository;
use brandforge_core::draft::{CompanyInfoPatch, Draft, DraftPatch};
use brandforge_core::strategy::{FixedChooser, StrategyComposer};
use brandforge_core::wizard::{STEP_COUNT, WizardStep};
use brandforge_infrastructure::{InMemoryBrandRepository, MockBehavior};
use std::sync::Arc;
use std::time::Duration;

fn usecase(brands: Arc<InMemoryBrandRepository>) -> WizardUseCase {
    WizardUseCase::new(brands)
        .with_composer(StrategyComposer::with_chooser(FixedChooser(0)))
        .with_generation_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_minimal_run_produces_fallback_strategy_brand() -> anyhow::Result<()> {
    let brands = Arc::new(InMemoryBrandRepository::empty(MockBehavior::instant()));
    let usecase = usecase(brands.clone());

    // Merge only a company name, then walk to the report step without
    // further edits.
    usecase
        .merge(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }))
        .await;
    for _ in 0..STEP_COUNT - 1 {
        usecase.advance().await;
    }
    assert_eq!(usecase.active_step().await, WizardStep::Report);

    let strategy = usecase.generate_report().await.expect("not stale");
    assert_eq!(strategy.brand_identity.name, "Acme");
    // Everything else is at its documented fallback.
    assert_eq!(strategy.brand_identity.description, "A forward-thinking company");
    assert_eq!(strategy.brand_identity.archetype, "The Innovator");
    assert_eq!(
        strategy.brand_identity.positioning,
        "Leading the market with innovation"
    );
    assert_eq!(strategy.target_audience.primary, "Tech-savvy professionals");
    assert!(strategy.competitive_analysis.main_competitors.is_empty());

    let brand = usecase.complete().await?.expect("not stale");
    assert_eq!(brand.name, "Acme");
    assert_eq!(brand.archetype, "The Innovator");
    assert_eq!(brand.colors.primary, "#6366F1");

    // The brand landed in the repository and the wizard reset.
    let stored = brands.list().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Acme");
    assert_eq!(usecase.draft_snapshot().await, Draft::default());
    assert_eq!(usecase.session_summary().await.active_step_index, 0);

    Ok(())
}

#[tokio::test]
async fn test_progress_survives_navigation_and_export_round_trips() -> anyhow::Result<()> {
    let brands = Arc::new(InMemoryBrandRepository::empty(MockBehavior::instant()));
    let usecase = usecase(brands);

    usecase
        .merge(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme Rocket Co".to_string()),
            ..Default::default()
        }))
        .await;

    usecase.advance().await;
    usecase.advance().await;
    usecase.retreat().await;
    assert_eq!(usecase.session_summary().await.active_step_index, 1);
    // The draft survives navigation.
    assert_eq!(usecase.draft_snapshot().await.company_info.name, "Acme Rocket Co");

    usecase.go_to(STEP_COUNT - 1).await?;
    let strategy = usecase.generate_report().await.expect("not stale");

    let export = usecase.export(&strategy, "json")?;
    assert_eq!(export.filename, "brand-strategy-acme-rocket-co.json");
    assert_eq!(export.size_estimate, export.payload.len());

    let err = usecase.export(&strategy, "xml").unwrap_err();
    assert!(err.is_unsupported_format());

    Ok(())
}

#[tokio::test]
async fn test_transient_provider_failure_is_retryable() -> anyhow::Result<()> {
    let flaky = Arc::new(InMemoryBrandRepository::with_behavior(
        MockBehavior::instant().with_failure_rate(1.0),
    ));
    let usecase = usecase(flaky);

    usecase
        .merge(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }))
        .await;

    let err = usecase.complete().await.unwrap_err();
    assert!(err.is_retryable());
    // The draft is preserved so completion can be retried.
    assert_eq!(usecase.draft_snapshot().await.company_info.name, "Acme");

    Ok(())
}
