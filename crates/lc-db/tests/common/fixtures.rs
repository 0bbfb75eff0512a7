use chrono::{Duration, Utc};
use lc_core::{AiAgent, User, Webinar};
use uuid::Uuid;

/// Creates a linked test user
pub fn create_test_user(external_id: &str, email: &str) -> User {
    User::new(
        external_id.to_string(),
        email.to_string(),
        "Test Host".to_string(),
        "https://img.test/avatar.png".to_string(),
    )
}

/// Creates a legacy test user with no identity-provider link
pub fn create_unlinked_user(email: &str) -> User {
    let mut user = create_test_user("ignored", email);
    user.external_id = None;
    user
}

/// Creates a test AI agent for a user
pub fn create_test_agent(user_id: Uuid) -> AiAgent {
    AiAgent::new(user_id, "Lead follow-up".to_string(), "gpt-4o".to_string())
}

/// Creates a test webinar starting tomorrow
pub fn create_test_webinar(presenter_id: Uuid) -> Webinar {
    Webinar::new(
        presenter_id,
        "Test Webinar".to_string(),
        Utc::now() + Duration::days(1),
    )
}
