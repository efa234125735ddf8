//! Draft domain module.
//!
//! A draft is the composite document the wizard accumulates: one typed
//! record per step, mutated by whichever step is active and never
//! validated.
//!
//! # Module Structure
//!
//! - `model`: Per-step draft records and the composite `Draft`
//! - `patch`: Partial step updates (`DraftPatch`) with shallow-merge
//!   semantics
//! - `store`: Observable draft container (`DraftStore`)

mod model;
mod patch;
mod store;

// Re-export public API
pub use model::{
    ArchetypeDraft, AudienceDraft, CompanyInfoDraft, CompetitorEntry, CompetitorsDraft,
    Demographics, Draft, MessagingDraft, PositioningDraft, Psychographics, ValuesDraft,
};
pub use patch::{
    ArchetypePatch, AudiencePatch, CompanyInfoPatch, CompetitorsPatch, DraftPatch,
    MessagingPatch, PositioningPatch, ValuesPatch,
};
pub use store::{DraftObserver, DraftStore};
