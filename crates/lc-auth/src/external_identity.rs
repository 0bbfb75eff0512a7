use crate::SessionClaims;

use serde::{Deserialize, Serialize};

/// The authenticated user object supplied by the identity provider for the
/// current session. Read-only to everything downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Opaque stable identifier owned by the provider
    pub external_id: String,
    /// Verified email addresses, primary first
    pub emails: Vec<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

impl ExternalIdentity {
    /// The primary (first) verified email, if the account has any
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Display name from whichever name parts are present
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        name.trim().to_string()
    }

    /// Avatar URL, empty string when the provider has none
    pub fn profile_image(&self) -> String {
        self.image_url.clone().unwrap_or_default()
    }
}

impl From<SessionClaims> for ExternalIdentity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            external_id: claims.sub,
            emails: claims.emails,
            first_name: claims.first_name,
            last_name: claims.last_name,
            image_url: claims.image_url,
        }
    }
}
