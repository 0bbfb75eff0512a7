//! Port to the identity provider.
//!
//! The reconciliation procedure never reaches for ambient session state:
//! the session token travels as an explicit argument and this seam turns
//! it into an [`ExternalIdentity`].

use crate::{ExternalIdentity, JwtValidator, Result as AuthErrorResult};

use async_trait::async_trait;

/// Resolves a session token into the authenticated external identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `Ok(None)` when the token is absent, expired, or otherwise
    /// not a valid session. The caller decides how to surface that.
    async fn current_identity(
        &self,
        session_token: Option<&str>,
    ) -> AuthErrorResult<Option<ExternalIdentity>>;
}

/// Identity provider backed by the provider's signed session tokens.
///
/// The provider's JWT template carries the whole public profile, so
/// verifying the signature is the only work needed.
pub struct JwtIdentityProvider {
    validator: JwtValidator,
}

impl JwtIdentityProvider {
    pub fn new(validator: JwtValidator) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn current_identity(
        &self,
        session_token: Option<&str>,
    ) -> AuthErrorResult<Option<ExternalIdentity>> {
        let Some(token) = session_token else {
            return Ok(None);
        };

        // Every validation failure means the same thing to callers: there
        // is no authenticated identity on this request.
        match self.validator.validate(token) {
            Ok(claims) => Ok(Some(ExternalIdentity::from(claims))),
            Err(_) => Ok(None),
        }
    }
}
