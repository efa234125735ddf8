//! Strategy domain module.
//!
//! The strategy is the read-only report composed from a completed draft:
//! a fixed-shape record covering identity, audience, competition,
//! messaging, visual direction and rollout timeline.
//!
//! # Module Structure
//!
//! - `model`: The composed `Strategy` and its sections
//! - `archetype`: Brand archetype catalog and profile lookup
//! - `composer`: Pure draft-to-strategy composition with an injectable
//!   chooser for the canned tagline templates

mod archetype;
mod composer;
mod model;

// Re-export public API
pub use archetype::{Archetype, ArchetypeProfile, DEFAULT_ARCHETYPE, archetypes, profile_for};
pub use composer::{Chooser, FixedChooser, StrategyComposer, UniformChooser};
pub use model::{
    BrandIdentity, CompetitiveAnalysis, MessagingFramework, Strategy, TargetAudience,
    TimelineEntry,
};
