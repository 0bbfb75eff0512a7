#[allow(clippy::module_inception)]
pub mod onboarding;
pub mod onboarding_status_response;
