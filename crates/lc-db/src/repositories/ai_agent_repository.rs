//! AI agent repository. Agents are opaque to reconciliation: they are
//! listed alongside their owner and feed one onboarding flag.

use crate::{DbError, Result as DbErrorResult};

use lc_core::AiAgent;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AiAgentRepository {
    pool: SqlitePool,
}

impl AiAgentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, agent: &AiAgent) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO ai_agents (id, user_id, name, model, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(agent.id.to_string())
        .bind(agent.user_id.to_string())
        .bind(&agent.name)
        .bind(&agent.model)
        .bind(agent.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<AiAgent>> {
        let rows = sqlx::query(
            r#"
                SELECT id, user_id, name, model, created_at
                FROM ai_agents
                WHERE user_id = ?
                ORDER BY created_at
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> DbErrorResult<AiAgent> {
                let id: String = row.try_get("id")?;
                let user_id: String = row.try_get("user_id")?;
                let created_at: i64 = row.try_get("created_at")?;

                Ok(AiAgent {
                    id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                        message: format!("Invalid UUID in ai_agents.id: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?,
                    user_id: Uuid::parse_str(&user_id).map_err(|e| DbError::Initialization {
                        message: format!("Invalid UUID in ai_agents.user_id: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?,
                    name: row.try_get("name")?,
                    model: row.try_get("model")?,
                    created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                        DbError::Initialization {
                            message: "Invalid timestamp in ai_agents.created_at".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        }
                    })?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn exists_for_user(&self, user_id: Uuid) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ai_agents WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
