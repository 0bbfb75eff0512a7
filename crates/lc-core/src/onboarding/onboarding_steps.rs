//! Onboarding checklist flags and per-step state derivation.

use crate::StepState;
use crate::onboarding::step_definition::STEP_COUNT;

use serde::{Deserialize, Serialize};

/// Completion flags for the fixed, ordered onboarding checklist.
///
/// Field order matters and matches the checklist order: Stripe first, then
/// the first AI agent, then the first webinar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSteps {
    pub connect_stripe: bool,
    pub create_ai_agent: bool,
    pub create_webinar: bool,
}

impl OnboardingSteps {
    /// Flags in checklist order
    fn flags(&self) -> [bool; STEP_COUNT] {
        [self.connect_stripe, self.create_ai_agent, self.create_webinar]
    }

    /// Whether every step is done. A fully completed checklist is not
    /// rendered at all.
    pub fn all_completed(&self) -> bool {
        self.flags().iter().all(|&done| done)
    }

    /// Index of the first incomplete step, if any
    pub fn first_incomplete(&self) -> Option<usize> {
        self.flags().iter().position(|&done| !done)
    }

    /// State of the step at `index`: completed if its flag is set, current
    /// if it is the first incomplete step, pending otherwise.
    pub fn state_of(&self, index: usize) -> StepState {
        if self.flags()[index] {
            return StepState::Completed;
        }
        if self.first_incomplete() == Some(index) {
            StepState::Current
        } else {
            StepState::Pending
        }
    }

    /// States for every step, in checklist order
    pub fn states(&self) -> [StepState; STEP_COUNT] {
        std::array::from_fn(|index| self.state_of(index))
    }
}
