use crate::api::auth::auth::reconcile_user;
use crate::api::onboarding::onboarding::get_onboarding_status;
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Reconciliation endpoint - the page-render path calls this on sign-in
        .route("/api/v1/auth/reconcile", post(reconcile_user))
        // Onboarding checklist status
        .route("/api/v1/onboarding/status", get(get_onboarding_status))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (the web app runs on a different origin in dev)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
