use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled webinar, presented by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    pub id: Uuid,
    pub presenter_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Webinar {
    pub fn new(presenter_id: Uuid, title: String, start_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            presenter_id,
            title,
            description: None,
            start_time,
            created_at: Utc::now(),
        }
    }
}
