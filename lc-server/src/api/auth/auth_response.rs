use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// Successful reconciliation response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
}
