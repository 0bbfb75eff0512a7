//! User repository - the lookups and writes behind identity reconciliation.
//!
//! Uniqueness of `external_id` and `email` is enforced by the schema, not
//! by this code: concurrent first logins race to the same INSERT and the
//! loser surfaces as [`DbError::UniqueViolation`] for the caller to
//! re-resolve.

use crate::repositories::ai_agent_repository::AiAgentRepository;
use crate::{DbError, Result as DbErrorResult};

use lc_core::{User, UserWithAgents};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, external_id, email, name, profile_image,
                    stripe_connect_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.external_id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.profile_image)
        .bind(&user.stripe_connect_id)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserWithAgents>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, name, profile_image,
                    stripe_connect_id, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> DbErrorResult<Option<UserWithAgents>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, name, profile_image,
                    stripe_connect_id, created_at, updated_at
                FROM users
                WHERE external_id = ?
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserWithAgents>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, name, profile_image,
                    stripe_connect_id, created_at, updated_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    /// Lookup matching either key. Used by conflict recovery, where the
    /// caller no longer knows which uniqueness constraint fired.
    pub async fn find_by_external_id_or_email(
        &self,
        external_id: &str,
        email: &str,
    ) -> DbErrorResult<Option<UserWithAgents>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, name, profile_image,
                    stripe_connect_id, created_at, updated_at
                FROM users
                WHERE external_id = ? OR email = ?
            "#,
        )
        .bind(external_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    /// Attach the provider link to a record that predates it.
    ///
    /// The `external_id IS NULL` guard makes the write a no-op when a
    /// concurrent call linked the record first; either way the re-read
    /// returns the linked row.
    pub async fn link_external_id(
        &self,
        id: Uuid,
        external_id: &str,
    ) -> DbErrorResult<UserWithAgents> {
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE users
                SET external_id = ?, updated_at = ?
                WHERE id = ? AND external_id IS NULL
            "#,
        )
        .bind(external_id)
        .bind(updated_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            DbError::Initialization {
                message: format!("User {} vanished while linking external id", id),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Atomic create-or-update keyed on `external_id`.
    ///
    /// If a row with this `external_id` appeared since the caller's
    /// lookups, its profile fields are refreshed instead of inserting.
    /// An insert that instead collides on `email` surfaces as
    /// [`DbError::UniqueViolation`].
    pub async fn upsert_by_external_id(
        &self,
        external_id: &str,
        email: &str,
        name: &str,
        profile_image: &str,
    ) -> DbErrorResult<UserWithAgents> {
        let id = Uuid::new_v4();
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, external_id, email, name, profile_image,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(external_id) DO UPDATE SET
                    email = excluded.email,
                    name = excluded.name,
                    profile_image = excluded.profile_image,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(id.to_string())
        .bind(external_id)
        .bind(email)
        .bind(name)
        .bind(profile_image)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // SQLite RETURNING is avoided here; read back the row that won.
        self.find_by_external_id(external_id).await?.ok_or_else(|| {
            DbError::Initialization {
                message: format!("Upserted user {} not found on re-read", external_id),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    async fn hydrate(&self, row: Option<SqliteRow>) -> DbErrorResult<Option<UserWithAgents>> {
        let Some(row) = row else {
            return Ok(None);
        };

        let user = row_to_user(&row)?;
        let agents = AiAgentRepository::new(self.pool.clone())
            .list_by_user(user.id)
            .await?;

        Ok(Some(UserWithAgents::new(user, agents)))
    }
}

fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        external_id: row.try_get("external_id")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        profile_image: row.try_get("profile_image")?,
        stripe_connect_id: row.try_get("stripe_connect_id")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
