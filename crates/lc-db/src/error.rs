use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A UNIQUE constraint rejected the write. Surfaced as its own variant
    /// so callers can branch on conflicts without inspecting driver codes.
    #[error("Unique constraint violation: {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_unique_violation()
        {
            return Self::UniqueViolation {
                constraint: db_err.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
