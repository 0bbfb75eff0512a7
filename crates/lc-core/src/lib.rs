pub mod error;
pub mod models;
pub mod onboarding;

pub use error::{CoreError, Result};
pub use models::ai_agent::AiAgent;
pub use models::user::User;
pub use models::user_with_agents::UserWithAgents;
pub use models::webinar::Webinar;
pub use onboarding::onboarding_steps::OnboardingSteps;
pub use onboarding::step_definition::{ONBOARDING_STEPS, StepDefinition};
pub use onboarding::step_state::StepState;
