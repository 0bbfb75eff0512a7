//! Authentication REST API handlers

use crate::api::auth::auth_response::AuthResponse;
use crate::api::auth::reconcile::reconcile;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::session_token::SessionToken;
use crate::app_state::AppState;

use lc_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/v1/auth/reconcile
///
/// Ensure the authenticated identity has exactly one local user record.
/// 200 for an existing record, 201 when one was created.
pub async fn reconcile_user(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let users = UserRepository::new(state.pool.clone());
    let outcome = reconcile(state.identity.as_ref(), token.as_deref(), &users).await?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(AuthResponse {
            user: outcome.into_user().into(),
        }),
    ))
}
