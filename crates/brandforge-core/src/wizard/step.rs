//! Ordered wizard step registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Number of steps in the wizard, including the final report step.
pub const STEP_COUNT: usize = 8;

/// The ordered steps of the brand strategy wizard.
///
/// Declaration order is registry order: `iter()` yields the steps in the
/// order a session walks through them, ending at the report step. The
/// report step is reachable but not absorbing (retreating from it is
/// allowed).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    CompanyInfo,
    Audience,
    Competitors,
    Values,
    Archetype,
    Positioning,
    Messaging,
    Report,
}

impl WizardStep {
    /// Human-readable step title shown by the progress indicator.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CompanyInfo => "Company Info",
            Self::Audience => "Target Audience",
            Self::Competitors => "Competitors",
            Self::Values => "Brand Values",
            Self::Archetype => "Archetype",
            Self::Positioning => "Positioning",
            Self::Messaging => "Messaging",
            Self::Report => "Strategy Report",
        }
    }

    /// Zero-based position of this step in registry order.
    pub fn index(&self) -> usize {
        Self::iter().position(|s| s == *self).unwrap_or(0)
    }

    /// Looks up a step by registry index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The last step in the registry.
    pub fn last() -> Self {
        Self::Report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_count() {
        assert_eq!(WizardStep::iter().count(), STEP_COUNT);
        assert_eq!(WizardStep::from_index(0), Some(WizardStep::CompanyInfo));
        assert_eq!(WizardStep::from_index(STEP_COUNT - 1), Some(WizardStep::Report));
        assert_eq!(WizardStep::from_index(STEP_COUNT), None);
    }

    #[test]
    fn test_index_round_trip() {
        for step in WizardStep::iter() {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(WizardStep::CompanyInfo.title(), "Company Info");
        assert_eq!(WizardStep::Report.title(), "Strategy Report");
    }
}
