//! Onboarding REST API handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::session_token::SessionToken;
use crate::api::onboarding::onboarding_status_response::OnboardingStatusResponse;
use crate::app_state::AppState;

use lc_core::OnboardingSteps;
use lc_db::{AiAgentRepository, UserRepository, WebinarRepository};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/v1/onboarding/status
///
/// Compute the onboarding flags for the authenticated user. 403 without an
/// identity, 404 when the identity has no local record yet.
pub async fn get_onboarding_status(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> ApiResult<Json<OnboardingStatusResponse>> {
    let Some(identity) = state.identity.current_identity(token.as_deref()).await? else {
        return Err(ApiError::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let users = UserRepository::new(state.pool.clone());
    let Some(found) = users.find_by_external_id(&identity.external_id).await? else {
        return Err(ApiError::NotFound {
            message: "No user record for this identity".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let user = found.user;
    let steps = OnboardingSteps {
        connect_stripe: user.has_stripe_connected(),
        create_ai_agent: AiAgentRepository::new(state.pool.clone())
            .exists_for_user(user.id)
            .await?,
        create_webinar: WebinarRepository::new(state.pool.clone())
            .exists_for_presenter(user.id)
            .await?,
    };

    Ok(Json(OnboardingStatusResponse::from(steps)))
}
