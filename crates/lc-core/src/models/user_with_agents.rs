use crate::{AiAgent, User};

use serde::{Deserialize, Serialize};

/// A user together with the AI agents they own.
///
/// This is the shape the reconciliation procedure hands back to callers:
/// the page that triggers sign-in also renders the agent list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithAgents {
    #[serde(flatten)]
    pub user: User,
    pub agents: Vec<AiAgent>,
}

impl UserWithAgents {
    pub fn new(user: User, agents: Vec<AiAgent>) -> Self {
        Self { user, agents }
    }
}
