//! Bounded step cursor for the wizard.

use super::step::{STEP_COUNT, WizardStep};
use crate::error::{BrandforgeError, Result};
use serde::{Deserialize, Serialize};

/// A bounded cursor over the wizard's step registry.
///
/// The active index always satisfies `0 <= index < STEP_COUNT`. Relative
/// moves saturate at the boundaries instead of failing; only absolute jumps
/// via [`Navigator::go_to`] can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigator {
    active_index: usize,
}

impl Navigator {
    /// Creates a navigator positioned at the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active step index.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The currently active step.
    pub fn active_step(&self) -> WizardStep {
        // Invariant: active_index < STEP_COUNT
        WizardStep::from_index(self.active_index).unwrap_or(WizardStep::CompanyInfo)
    }

    /// Whether the cursor is at the first step.
    pub fn is_first(&self) -> bool {
        self.active_index == 0
    }

    /// Whether the cursor is at the final (report) step.
    pub fn is_last(&self) -> bool {
        self.active_index == STEP_COUNT - 1
    }

    /// Moves to the next step. No-op at the last step.
    ///
    /// Returns the active index after the move.
    pub fn advance(&mut self) -> usize {
        if !self.is_last() {
            self.active_index += 1;
        }
        self.active_index
    }

    /// Moves to the previous step. No-op at the first step.
    ///
    /// Returns the active index after the move.
    pub fn retreat(&mut self) -> usize {
        if !self.is_first() {
            self.active_index -= 1;
        }
        self.active_index
    }

    /// Jumps to an absolute step index.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::OutOfRange` when `index` is outside
    /// `[0, STEP_COUNT)`. This is a contract violation, not a retryable
    /// condition.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= STEP_COUNT {
            return Err(BrandforgeError::out_of_range(index, STEP_COUNT));
        }
        self.active_index = index;
        Ok(())
    }

    /// Resets the cursor to the first step.
    pub fn reset(&mut self) {
        self.active_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_retreat_round_trip() {
        // From every interior index, advance then retreat is identity.
        for start in 0..STEP_COUNT - 1 {
            let mut nav = Navigator::new();
            nav.go_to(start).unwrap();
            nav.advance();
            nav.retreat();
            assert_eq!(nav.active_index(), start);
        }
    }

    #[test]
    fn test_boundary_no_ops() {
        let mut nav = Navigator::new();
        assert_eq!(nav.retreat(), 0);

        nav.go_to(STEP_COUNT - 1).unwrap();
        assert_eq!(nav.advance(), STEP_COUNT - 1);

        // The last step is not absorbing.
        assert_eq!(nav.retreat(), STEP_COUNT - 2);
    }

    #[test]
    fn test_go_to_bounds() {
        let mut nav = Navigator::new();

        for index in 0..STEP_COUNT {
            nav.go_to(index).unwrap();
            assert_eq!(nav.active_index(), index);
        }

        let err = nav.go_to(STEP_COUNT).unwrap_err();
        assert!(err.is_out_of_range());
        // Failed jumps leave the cursor untouched.
        assert_eq!(nav.active_index(), STEP_COUNT - 1);

        let err = nav.go_to(usize::MAX).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_active_step() {
        let mut nav = Navigator::new();
        assert_eq!(nav.active_step(), WizardStep::CompanyInfo);
        nav.go_to(STEP_COUNT - 1).unwrap();
        assert_eq!(nav.active_step(), WizardStep::Report);
    }
}
