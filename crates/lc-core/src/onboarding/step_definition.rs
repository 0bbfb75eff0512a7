//! The static onboarding step catalog.

use serde::Serialize;

pub const STEP_COUNT: usize = 3;

/// Display metadata for one onboarding step.
///
/// `id` is 1-based and shown in the step indicator; `path` is where the
/// frontend sends the user to complete the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub id: u8,
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

/// The checklist, in completion order
pub const ONBOARDING_STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        id: 1,
        key: "connect_stripe",
        title: "Connect Stripe",
        description: "Link a Stripe account so attendees can pay you",
        path: "/settings",
    },
    StepDefinition {
        id: 2,
        key: "create_ai_agent",
        title: "Create an AI Agent",
        description: "Set up the agent that follows up with your leads",
        path: "/ai-agents",
    },
    StepDefinition {
        id: 3,
        key: "create_webinar",
        title: "Create a Webinar",
        description: "Schedule your first webinar",
        path: "/webinars",
    },
];
