use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// How session tokens from the identity provider are verified.
///
/// Exactly one of `jwt_secret` (HS256) or `jwt_public_key_path` (RS256)
/// must be configured - the server cannot resolve identities without one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// Path to a PEM public key, relative to the config directory
    pub jwt_public_key_path: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (None, None) => Err(ConfigError::auth(
                "one of auth.jwt_secret or auth.jwt_public_key_path is required",
            )),
            _ => Ok(()),
        }
    }

    /// Algorithm name for the startup summary
    pub fn algorithm(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else {
            "RS256"
        }
    }
}
