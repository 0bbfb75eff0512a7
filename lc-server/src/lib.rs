pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::reconcile_user,
        auth_response::AuthResponse,
        reconcile::{Reconciliation, reconcile},
        user_dto::{AiAgentDto, UserDto},
    },
    error::{ApiError, Result as ApiResult},
    extractors::session_token::SessionToken,
    onboarding::{
        onboarding::get_onboarding_status,
        onboarding_status_response::{OnboardingStatusResponse, StepItemDto},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
