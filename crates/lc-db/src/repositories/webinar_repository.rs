//! Webinar repository. Reconciliation never touches webinars; their only
//! role here is feeding the last onboarding flag.

use crate::Result as DbErrorResult;

use lc_core::Webinar;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct WebinarRepository {
    pool: SqlitePool,
}

impl WebinarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, webinar: &Webinar) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO webinars (id, presenter_id, title, description, start_time, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(webinar.id.to_string())
        .bind(webinar.presenter_id.to_string())
        .bind(&webinar.title)
        .bind(&webinar.description)
        .bind(webinar.start_time.timestamp())
        .bind(webinar.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn exists_for_presenter(&self, presenter_id: Uuid) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM webinars WHERE presenter_id = ?")
            .bind(presenter_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
