#![allow(dead_code)]

//! Test infrastructure for lc-server API tests

use lc_auth::{JwtIdentityProvider, JwtValidator, SessionClaims};
use lc_server::AppState;

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/lc-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a file-backed pool allowing real connection concurrency
pub async fn create_file_test_pool(dir: &tempfile::TempDir) -> SqlitePool {
    let pool = lc_db::connect(&dir.path().join("test.db"), 5)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/lc-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, session tokens verified with HS256
pub fn create_test_app_state(pool: SqlitePool) -> AppState {
    AppState {
        pool,
        identity: Arc::new(JwtIdentityProvider::new(JwtValidator::with_hs256(
            TEST_JWT_SECRET,
        ))),
    }
}

/// Mint a session token the test validator accepts
pub fn mint_session_token(external_id: &str, emails: &[&str]) -> String {
    let claims = SessionClaims {
        sub: external_id.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        emails: emails.iter().map(|email| email.to_string()).collect(),
        first_name: Some("Test".to_string()),
        last_name: Some("Host".to_string()),
        image_url: None,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to mint session token")
}

/// Insert a user row directly; external_id is optional
pub async fn insert_user(
    pool: &SqlitePool,
    external_id: Option<&str>,
    email: &str,
) -> uuid::Uuid {
    let user_id = uuid::Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO users (id, external_id, email, name, profile_image, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id.to_string())
    .bind(external_id)
    .bind(email)
    .bind("Existing Host")
    .bind("")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert user");

    user_id
}

/// Mark the user's Stripe account as connected
pub async fn connect_stripe(pool: &SqlitePool, user_id: uuid::Uuid) {
    sqlx::query("UPDATE users SET stripe_connect_id = ? WHERE id = ?")
        .bind("acct_test_123")
        .bind(user_id.to_string())
        .execute(pool)
        .await
        .expect("Failed to connect stripe");
}

/// Insert an AI agent for the user
pub async fn insert_agent(pool: &SqlitePool, user_id: uuid::Uuid) {
    sqlx::query("INSERT INTO ai_agents (id, user_id, name, model, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind("Lead follow-up")
        .bind("gpt-4o")
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to insert agent");
}

/// Insert a webinar presented by the user
pub async fn insert_webinar(pool: &SqlitePool, user_id: uuid::Uuid) {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO webinars (id, presenter_id, title, description, start_time, created_at)
            VALUES (?, ?, ?, NULL, ?, ?)
        "#,
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(user_id.to_string())
    .bind("Test Webinar")
    .bind(now + 86_400)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert webinar");
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
