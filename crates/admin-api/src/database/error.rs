//! Storage-level error classification

use sqlx::error::DatabaseError;
use thiserror::Error;

/// Errors surfaced by the repositories. Handlers translate these into
/// HTTP responses; nothing below the handler layer retries or recovers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("row not found")]
    RowNotFound,

    #[error("username already exists: {0}")]
    UsernameTaken(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Map a sqlx insert failure, turning a UNIQUE violation on the
    /// users table into `UsernameTaken`.
    pub fn from_insert(err: sqlx::Error, username: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return StoreError::UsernameTaken(username.to_string());
            }
        }
        StoreError::Database(err)
    }
}
