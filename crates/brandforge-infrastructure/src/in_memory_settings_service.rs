//! In-memory settings service.

use crate::mock::MockBehavior;
use brandforge_core::error::Result;
use brandforge_core::settings::WorkspaceSettings;
use tokio::sync::RwLock;

/// Holds the workspace settings for the lifetime of the process.
pub struct InMemorySettingsService {
    settings: RwLock<WorkspaceSettings>,
    behavior: MockBehavior,
}

impl InMemorySettingsService {
    /// Creates a service holding the fresh-workspace defaults.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::default())
    }

    /// Creates a service with custom latency/failure behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            settings: RwLock::new(WorkspaceSettings::default()),
            behavior,
        }
    }

    /// Reads the current settings.
    pub async fn get(&self) -> Result<WorkspaceSettings> {
        self.behavior.simulate("get settings").await?;
        Ok(self.settings.read().await.clone())
    }

    /// Replaces the stored settings.
    pub async fn save(&self, settings: WorkspaceSettings) -> Result<()> {
        self.behavior.simulate("save settings").await?;
        tracing::debug!("workspace settings saved");
        *self.settings.write().await = settings;
        Ok(())
    }
}

impl Default for InMemorySettingsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_round_trips() {
        let service = InMemorySettingsService::with_behavior(MockBehavior::instant());

        let mut settings = service.get().await.unwrap();
        assert!(!settings.integrations.figma);

        settings.integrations.figma = true;
        settings.branding.default_industry = "retail".to_string();
        service.save(settings.clone()).await.unwrap();

        let reloaded = service.get().await.unwrap();
        assert_eq!(reloaded, settings);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_settings() {
        let flaky = InMemorySettingsService::with_behavior(
            MockBehavior::instant().with_failure_rate(1.0),
        );
        let mut settings = WorkspaceSettings::default();
        settings.privacy.marketing_emails = true;

        assert!(flaky.save(settings).await.unwrap_err().is_retryable());
    }
}
