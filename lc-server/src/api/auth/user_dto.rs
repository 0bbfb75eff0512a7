use lc_core::{AiAgent, UserWithAgents};

use serde::Serialize;

/// User DTO for JSON serialization, agents included
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub external_id: Option<String>,
    pub email: String,
    pub name: String,
    pub profile_image: String,
    pub stripe_connect_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub agents: Vec<AiAgentDto>,
}

#[derive(Debug, Serialize)]
pub struct AiAgentDto {
    pub id: String,
    pub name: String,
    pub model: String,
    pub created_at: i64,
}

impl From<UserWithAgents> for UserDto {
    fn from(found: UserWithAgents) -> Self {
        let user = found.user;
        Self {
            id: user.id.to_string(),
            external_id: user.external_id,
            email: user.email,
            name: user.name,
            profile_image: user.profile_image,
            stripe_connect_id: user.stripe_connect_id,
            created_at: user.created_at.timestamp(),
            updated_at: user.updated_at.timestamp(),
            agents: found.agents.into_iter().map(AiAgentDto::from).collect(),
        }
    }
}

impl From<AiAgent> for AiAgentDto {
    fn from(agent: AiAgent) -> Self {
        Self {
            id: agent.id.to_string(),
            name: agent.name,
            model: agent.model,
            created_at: agent.created_at.timestamp(),
        }
    }
}
