//! Workspace preference settings.
//!
//! Application-level preferences that persist for the lifetime of the
//! process. Defaults match a fresh workspace.

use serde::{Deserialize, Serialize};

/// Notification preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub competitor_alerts: bool,
    pub brand_updates: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            competitor_alerts: true,
            brand_updates: false,
            weekly_reports: true,
        }
    }
}

/// Branding workflow preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    pub default_industry: String,
    pub auto_generate_assets: bool,
    pub brand_consistency_checks: bool,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            default_industry: "technology".to_string(),
            auto_generate_assets: true,
            brand_consistency_checks: true,
        }
    }
}

/// Third-party integration toggles. All off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSettings {
    pub canva: bool,
    pub figma: bool,
    pub slack: bool,
    pub hubspot: bool,
}

/// Privacy preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub data_collection: bool,
    pub analytics_tracking: bool,
    pub marketing_emails: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            data_collection: true,
            analytics_tracking: true,
            marketing_emails: false,
        }
    }
}

/// The complete workspace settings record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    pub notifications: NotificationSettings,
    pub branding: BrandingSettings,
    pub integrations: IntegrationSettings,
    pub privacy: PrivacySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_workspace_defaults() {
        let settings = WorkspaceSettings::default();
        assert!(settings.notifications.email_notifications);
        assert!(!settings.notifications.brand_updates);
        assert_eq!(settings.branding.default_industry, "technology");
        assert!(!settings.integrations.slack);
        assert!(!settings.privacy.marketing_emails);
    }
}
