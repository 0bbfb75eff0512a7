use crate::api::auth::reconcile::{Reconciliation, reconcile, recover_from_conflict};
use crate::api::error::ApiError;

use lc_auth::{ExternalIdentity, IdentityProvider, Result as AuthErrorResult};
use lc_core::User;
use lc_db::UserRepository;

use async_trait::async_trait;
use googletest::prelude::*;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Identity provider stub resolving every request to a fixed identity
struct StubProvider(Option<ExternalIdentity>);

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn current_identity(
        &self,
        _session_token: Option<&str>,
    ) -> AuthErrorResult<Option<ExternalIdentity>> {
        Ok(self.0.clone())
    }
}

async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/lc-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn identity(external_id: &str, emails: &[&str]) -> ExternalIdentity {
    ExternalIdentity {
        external_id: external_id.to_string(),
        emails: emails.iter().map(|email| email.to_string()).collect(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        image_url: None,
    }
}

async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn given_no_identity_then_unauthenticated_and_no_write() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let provider = StubProvider(None);

    let result = reconcile(&provider, None, &users).await;

    assert_that!(
        matches!(result, Err(ApiError::Unauthenticated { .. })),
        eq(true)
    );
    assert_that!(count_users(&pool).await, eq(0));
}

#[tokio::test]
async fn given_identity_without_email_then_validation_error_and_no_write() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let provider = StubProvider(Some(identity("idp_no_email", &[])));

    let result = reconcile(&provider, Some("token"), &users).await;

    assert_that!(
        matches!(result, Err(ApiError::Validation { .. })),
        eq(true)
    );
    assert_that!(count_users(&pool).await, eq(0));
}

#[tokio::test]
async fn given_new_identity_then_record_created() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let provider = StubProvider(Some(identity("idp_new", &["new@example.com"])));

    let outcome = reconcile(&provider, Some("token"), &users).await.unwrap();

    assert_that!(outcome.is_created(), eq(true));
    let user = outcome.into_user();
    assert_that!(user.user.external_id, some(eq("idp_new")));
    assert_that!(user.user.name, eq("Ada Lovelace"));
    assert_that!(count_users(&pool).await, eq(1));
}

#[tokio::test]
async fn given_repeated_calls_then_idempotent() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let provider = StubProvider(Some(identity("idp_repeat", &["repeat@example.com"])));

    let first = reconcile(&provider, Some("token"), &users).await.unwrap();
    let second = reconcile(&provider, Some("token"), &users).await.unwrap();

    assert_that!(first.is_created(), eq(true));
    assert_that!(second.is_created(), eq(false));
    assert_that!(
        second.into_user().user.id,
        eq(first.into_user().user.id)
    );
    assert_that!(count_users(&pool).await, eq(1));
}

#[tokio::test]
async fn given_recovery_after_conflict_then_existing_row_returned() {
    // The row a concurrent first login would have created
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let winner = User::new(
        "idp_race".to_string(),
        "race@example.com".to_string(),
        "Winner".to_string(),
        String::new(),
    );
    users.create(&winner).await.unwrap();

    let outcome = recover_from_conflict(
        &identity("idp_race", &["race@example.com"]),
        "race@example.com",
        &users,
    )
    .await
    .unwrap();

    assert_that!(matches!(outcome, Reconciliation::Existing(_)), eq(true));
    assert_that!(outcome.into_user().user.id, eq(winner.id));
}

#[tokio::test]
async fn given_recovery_with_no_surviving_row_then_internal_error() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool);

    let result = recover_from_conflict(
        &identity("idp_ghost", &["ghost@example.com"]),
        "ghost@example.com",
        &users,
    )
    .await;

    assert_that!(matches!(result, Err(ApiError::Internal { .. })), eq(true));
}
