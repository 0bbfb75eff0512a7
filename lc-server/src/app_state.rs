use lc_auth::IdentityProvider;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub identity: Arc<dyn IdentityProvider>,
}
