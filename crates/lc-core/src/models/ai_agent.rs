use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An AI sales agent owned by a user.
///
/// Opaque to the reconciliation flow: agents are returned alongside their
/// owner but never modified by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAgent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl AiAgent {
    pub fn new(user_id: Uuid, name: String, model: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            model,
            created_at: Utc::now(),
        }
    }
}
