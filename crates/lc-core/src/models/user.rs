//! Local user record - the persisted counterpart of an external identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as stored in the local database.
///
/// `external_id` links the record to the identity provider's account. It is
/// nullable: records imported before the provider link existed (or created
/// through other channels) carry no link until their owner signs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Stable identifier assigned by the identity provider (unique when set)
    pub external_id: Option<String>,
    pub email: String,
    pub name: String,
    pub profile_image: String,
    /// Stripe account id, set once the user finishes Stripe onboarding
    pub stripe_connect_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new linked user from identity-provider attributes
    pub fn new(external_id: String, email: String, name: String, profile_image: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            external_id: Some(external_id),
            email,
            name,
            profile_image,
            stripe_connect_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the record is linked to an identity-provider account
    pub fn is_linked(&self) -> bool {
        self.external_id.is_some()
    }

    /// Check if the user has connected a Stripe account
    pub fn has_stripe_connected(&self) -> bool {
        self.stripe_connect_id.is_some()
    }
}
