//! Wizard use case implementation.
//!
//! This module provides the `WizardUseCase` which coordinates the single
//! active wizard session, the strategy composer and the brand provider:
//! step edits flow into the session's draft store, navigation moves the
//! bounded cursor, and completion turns the accumulated draft into a
//! persisted brand.

use brandforge_core::brand::{Brand, BrandRepository, NewBrand};
use brandforge_core::draft::{Draft, DraftObserver, DraftPatch, MessagingPatch};
use brandforge_core::error::Result;
use brandforge_core::export::{ExportAdapter, ExportResult};
use brandforge_core::strategy::{Strategy, StrategyComposer};
use brandforge_core::wizard::{SessionSummary, WizardSession, WizardStep};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Simulated report generation time, matching a real analysis round-trip.
const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Use case driving the brand strategy wizard.
///
/// Owns exactly one active [`WizardSession`] at a time. All service calls
/// are awaited sequentially by the invoking caller; the only suspension
/// point this use case adds is the simulated generation delay.
///
/// # Stale results
///
/// Report generation is tagged with the issuing session id and step index.
/// If the session was reset or navigated away from the report step while
/// generation was in flight, the result is discarded on arrival instead of
/// being applied.
pub struct WizardUseCase {
    /// The single active wizard session
    session: Arc<RwLock<WizardSession>>,
    /// Pure draft-to-strategy composition
    composer: StrategyComposer,
    /// Provider persisting completed strategies as brands
    brands: Arc<dyn BrandRepository>,
    /// Simulated generation latency
    generation_delay: Duration,
}

impl WizardUseCase {
    /// Creates a use case over the given brand provider with a fresh
    /// session, the default composer and the default generation delay.
    pub fn new(brands: Arc<dyn BrandRepository>) -> Self {
        Self {
            session: Arc::new(RwLock::new(WizardSession::new())),
            composer: StrategyComposer::new(),
            brands,
            generation_delay: DEFAULT_GENERATION_DELAY,
        }
    }

    /// Replaces the composer, e.g. to pin the tagline chooser in tests.
    pub fn with_composer(mut self, composer: StrategyComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Overrides the simulated generation delay.
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    /// Read-only metadata of the active session.
    pub async fn session_summary(&self) -> SessionSummary {
        self.session.read().await.summary()
    }

    /// The currently active wizard step.
    pub async fn active_step(&self) -> WizardStep {
        self.session.read().await.store.navigator().active_step()
    }

    /// An owned snapshot of the current draft.
    pub async fn draft_snapshot(&self) -> Draft {
        self.session.read().await.store.snapshot()
    }

    /// Subscribes an observer to draft mutations.
    pub async fn subscribe(&self, observer: DraftObserver) {
        self.session.write().await.store.subscribe(observer);
    }

    /// Merges a partial step update into the draft.
    pub async fn merge(&self, patch: DraftPatch) {
        let mut session = self.session.write().await;
        session.store.merge(patch);
        session.touch();
    }

    /// Moves to the next step. No-op at the report step.
    ///
    /// Returns the active index after the move.
    pub async fn advance(&self) -> usize {
        let mut session = self.session.write().await;
        let index = session.store.navigator_mut().advance();
        session.touch();
        index
    }

    /// Moves to the previous step. No-op at the first step.
    ///
    /// Returns the active index after the move.
    pub async fn retreat(&self) -> usize {
        let mut session = self.session.write().await;
        let index = session.store.navigator_mut().retreat();
        session.touch();
        index
    }

    /// Jumps to an absolute step index.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::OutOfRange` for indices outside the step
    /// registry; the session is untouched.
    pub async fn go_to(&self, index: usize) -> Result<usize> {
        let mut session = self.session.write().await;
        session.store.navigator_mut().go_to(index)?;
        session.touch();
        Ok(index)
    }

    /// Suggests a tagline, merges it into the messaging draft and returns
    /// it.
    pub async fn suggest_tagline(&self) -> String {
        let mut session = self.session.write().await;
        let tagline = self.composer.suggest_tagline(session.store.draft());
        session.store.merge(DraftPatch::Messaging(MessagingPatch {
            tagline: Some(tagline.clone()),
            ..Default::default()
        }));
        session.touch();
        tagline
    }

    /// Generates the strategy report from the current draft, simulating
    /// the analysis delay.
    ///
    /// Returns `None` when the result arrived stale: the session was reset
    /// or navigated to a different step while generation was in flight.
    pub async fn generate_report(&self) -> Option<Strategy> {
        let (issued_session, issued_step) = {
            let session = self.session.read().await;
            (session.id.clone(), session.store.navigator().active_index())
        };

        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        let session = self.session.read().await;
        if session.id != issued_session
            || session.store.navigator().active_index() != issued_step
        {
            tracing::debug!(
                session = %issued_session,
                step = issued_step,
                "discarding stale strategy result"
            );
            return None;
        }

        Some(self.composer.compose(session.store.draft()))
    }

    /// Exports a composed strategy in the named format.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::UnsupportedFormat` for names outside the
    /// supported set; the strategy is untouched.
    pub fn export(&self, strategy: &Strategy, format: &str) -> Result<ExportResult> {
        ExportAdapter::export_named(strategy, format)
    }

    /// Completes the wizard: generates the strategy, persists it as a
    /// brand, and resets the session for the next run.
    ///
    /// Returns `None` when the generated result arrived stale (see
    /// [`WizardUseCase::generate_report`]); the session is left as-is.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when brand creation fails. The draft
    /// is preserved in that case so the caller can retry.
    pub async fn complete(&self) -> Result<Option<Brand>> {
        let Some(strategy) = self.generate_report().await else {
            return Ok(None);
        };

        let brand = self.brands.create(NewBrand::from_strategy(&strategy)).await?;
        tracing::info!(brand_id = brand.id, name = %brand.name, "wizard completed");

        self.session.write().await.reset();
        Ok(Some(brand))
    }

    /// Discards the draft and starts a fresh session.
    pub async fn reset(&self) {
        self.session.write().await.reset();
    }
}
