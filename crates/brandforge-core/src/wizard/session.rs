//! Wizard session entity.

use crate::draft::DraftStore;
use serde::{Deserialize, Serialize};

/// A single run through the brand strategy wizard.
///
/// A session owns the draft store (and through it the active step index).
/// Exactly one session is active per user interaction at a time; there is
/// no concurrent-session model.
#[derive(Debug)]
pub struct WizardSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
    /// Draft document plus persisted step index
    pub store: DraftStore,
}

impl WizardSession {
    /// Creates a fresh session with an empty draft at the first step.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now.clone(),
            updated_at: now,
            store: DraftStore::new(),
        }
    }

    /// Marks the session as updated now.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    /// Discards the draft and starts the session over under a new identity.
    ///
    /// The previous draft is unrecoverable after this call.
    pub fn reset(&mut self) {
        self.id = uuid::Uuid::new_v4().to_string();
        self.store.reset();
        self.touch();
    }

    /// A serializable snapshot of the session for display layers.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            active_step_index: self.store.navigator().active_index(),
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only session metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub active_step_index: usize,
}
