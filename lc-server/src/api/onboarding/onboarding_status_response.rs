use lc_core::{ONBOARDING_STEPS, OnboardingSteps, StepState};

use serde::Serialize;

/// Onboarding checklist response.
///
/// `steps` carries the raw flags; `items` is the derived per-step view the
/// frontend renders. When `completed` is true the checklist is not shown.
#[derive(Debug, Serialize)]
pub struct OnboardingStatusResponse {
    pub steps: OnboardingSteps,
    pub items: Vec<StepItemDto>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct StepItemDto {
    pub id: u8,
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub state: StepState,
}

impl From<OnboardingSteps> for OnboardingStatusResponse {
    fn from(steps: OnboardingSteps) -> Self {
        let items = ONBOARDING_STEPS
            .iter()
            .zip(steps.states())
            .map(|(definition, state)| StepItemDto {
                id: definition.id,
                key: definition.key,
                title: definition.title,
                description: definition.description,
                path: definition.path,
                state,
            })
            .collect();

        Self {
            steps,
            items,
            completed: steps.all_completed(),
        }
    }
}
