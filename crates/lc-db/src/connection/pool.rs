//! SQLite pool construction shared by the server and integration tests.

use crate::Result as DbErrorResult;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};

/// Open (creating if missing) the database at `database_path`.
///
/// WAL with normal synchronous is the write-heavy-friendly SQLite setup;
/// the busy timeout covers concurrent writers contending for the file lock.
pub async fn connect(database_path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    Ok(pool)
}
