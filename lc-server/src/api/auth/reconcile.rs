//! User reconciliation - maps the authenticated external identity to
//! exactly one local user record.
//!
//! Branch order matters and is load-bearing:
//!
//! 1. no identity -> 403, 2. no email -> 400, 3. match on external id,
//! 4. match on email (linking the record if it predates the provider),
//! 5. upsert keyed on external id, 6. on a uniqueness conflict from a
//! concurrent first login, re-query once and return the row that won.
//!
//! Idempotent: repeated calls for the same identity converge on the same
//! record, with at most one write per call. No locks are held anywhere -
//! the database's UNIQUE constraints are the concurrency backstop.

use crate::api::error::{ApiError, Result as ApiResult};

use lc_auth::{ExternalIdentity, IdentityProvider};
use lc_core::UserWithAgents;
use lc_db::{DbError, UserRepository};

use std::panic::Location;

use error_location::ErrorLocation;

/// Outcome of a successful reconciliation
#[derive(Debug)]
pub enum Reconciliation {
    /// An existing record matched (and was linked if needed)
    Existing(UserWithAgents),
    /// A record was created for a first-time login
    Created(UserWithAgents),
}

impl Reconciliation {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn into_user(self) -> UserWithAgents {
        match self {
            Self::Existing(user) | Self::Created(user) => user,
        }
    }
}

pub async fn reconcile(
    provider: &dyn IdentityProvider,
    session_token: Option<&str>,
    users: &UserRepository,
) -> ApiResult<Reconciliation> {
    let Some(identity) = provider.current_identity(session_token).await? else {
        return Err(ApiError::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    // The email is the fallback lookup key; without one there is nothing
    // to reconcile against.
    let Some(email) = identity.primary_email() else {
        return Err(ApiError::Validation {
            message: "No email address found".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    // Already linked: nothing to write.
    if let Some(existing) = users.find_by_external_id(&identity.external_id).await? {
        return Ok(Reconciliation::Existing(existing));
    }

    // Known email: adopt the record, linking it when it predates the
    // provider. A record linked to a different identity is returned as-is.
    if let Some(existing) = users.find_by_email(email).await? {
        if !existing.user.is_linked() {
            let linked = users
                .link_external_id(existing.user.id, &identity.external_id)
                .await?;
            return Ok(Reconciliation::Existing(linked));
        }
        return Ok(Reconciliation::Existing(existing));
    }

    // First login. The upsert is keyed on external id so that a row
    // created concurrently since the lookups above is updated, not
    // duplicated.
    match users
        .upsert_by_external_id(
            &identity.external_id,
            email,
            &identity.display_name(),
            &identity.profile_image(),
        )
        .await
    {
        Ok(created) => Ok(Reconciliation::Created(created)),
        Err(DbError::UniqueViolation { .. }) => recover_from_conflict(&identity, email, users).await,
        Err(e) => Err(ApiError::from(e)),
    }
}

/// Race recovery for concurrent first logins.
///
/// A uniqueness conflict here means another invocation created the record
/// between our lookups and the upsert. One re-query by either key resolves
/// to the row that won; there are no retries beyond it.
pub(crate) async fn recover_from_conflict(
    identity: &ExternalIdentity,
    email: &str,
    users: &UserRepository,
) -> ApiResult<Reconciliation> {
    if let Some(existing) = users
        .find_by_external_id_or_email(&identity.external_id, email)
        .await?
    {
        return Ok(Reconciliation::Existing(existing));
    }

    // The conflicting row vanished before the re-query; give up with the
    // generic failure rather than retrying.
    Err(ApiError::Internal {
        message: "Internal Server Error".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
