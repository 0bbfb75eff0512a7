pub mod onboarding_steps;
pub mod step_definition;
pub mod step_state;
