//! Observable draft container.

use super::model::Draft;
use super::patch::DraftPatch;
use crate::wizard::Navigator;
use std::sync::Arc;

/// Callback invoked synchronously after every draft mutation.
pub type DraftObserver = Arc<dyn Fn(&Draft) + Send + Sync>;

/// Accumulates partial step updates into one composite draft and keeps the
/// active step index alive across navigation.
///
/// The store is guarded only by the single-session execution model: exactly
/// one wizard session mutates it at a time, and observers are notified
/// synchronously from the mutating call.
#[derive(Default)]
pub struct DraftStore {
    draft: Draft,
    navigator: Navigator,
    observers: Vec<DraftObserver>,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("draft", &self.draft)
            .field("navigator", &self.navigator)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DraftStore {
    /// Creates an empty store positioned at the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft document.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// An owned copy of the current draft, for composition or inspection.
    pub fn snapshot(&self) -> Draft {
        self.draft.clone()
    }

    /// The step cursor persisted by this store.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Mutable access to the step cursor.
    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Shallow-merges a partial step update into the draft and notifies
    /// all subscribed observers synchronously.
    ///
    /// Total over its input domain; accepts any patch regardless of which
    /// step is currently active.
    pub fn merge(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
        self.notify();
    }

    /// Clears the draft and resets the step index to the initial state,
    /// then notifies observers.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.navigator.reset();
        self.notify();
    }

    /// Subscribes an observer to draft mutations.
    pub fn subscribe(&mut self, observer: DraftObserver) {
        self.observers.push(observer);
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.draft);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{CompanyInfoPatch, MessagingPatch};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_merge_accumulates_across_steps() {
        let mut store = DraftStore::new();

        store.merge(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }));
        store.merge(DraftPatch::Messaging(MessagingPatch {
            tagline: Some("Just build".to_string()),
            ..Default::default()
        }));

        assert_eq!(store.draft().company_info.name, "Acme");
        assert_eq!(store.draft().messaging.tagline, "Just build");
    }

    #[test]
    fn test_reset_clears_draft_and_index() {
        let mut store = DraftStore::new();
        store.merge(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }));
        store.navigator_mut().advance();
        store.navigator_mut().advance();

        store.reset();

        assert_eq!(*store.draft(), Draft::default());
        assert_eq!(store.navigator().active_index(), 0);
    }

    #[test]
    fn test_observers_notified_synchronously() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let mut store = DraftStore::new();
        store.subscribe(Arc::new(move |draft: &Draft| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            // Observers see the post-merge state.
            assert!(!draft.company_info.name.is_empty() || draft == &Draft::default());
        }));

        store.merge(DraftPatch::CompanyInfo(CompanyInfoPatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        }));
        store.reset();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
