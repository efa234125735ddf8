//! Wizard domain module.
//!
//! This module contains the wizard step registry, the bounded step cursor,
//! and the session entity that ties a draft document to its progress.
//!
//! # Module Structure
//!
//! - `step`: Ordered wizard step registry (`WizardStep`)
//! - `navigator`: Bounded step cursor (`Navigator`)
//! - `session`: Wizard session entity (`WizardSession`)

mod navigator;
mod session;
mod step;

// Re-export public API
pub use navigator::Navigator;
pub use session::{SessionSummary, WizardSession};
pub use step::{STEP_COUNT, WizardStep};
