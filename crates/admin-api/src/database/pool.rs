use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::error::StoreError;
use crate::config::DatabaseConfig;

/// Owns the SQLite connection pool. Every repository is handed a clone
/// of this at construction; the pool itself is the single shared
/// storage handle for the whole process.
#[derive(Clone)]
pub struct DbPool {
    pool: SqlitePool,
}

impl DbPool {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an already-connected pool. Used by tests running against
    /// in-memory databases.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Idempotently create the tables the handlers depend on. The
    /// process must not serve traffic if this fails.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS menu (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                parent_id INTEGER NOT NULL DEFAULT 0,
                name TEXT NOT NULL DEFAULT '',
                icon TEXT NOT NULL DEFAULT '',
                path TEXT NOT NULL DEFAULT '',
                component TEXT NOT NULL DEFAULT '',
                redirect TEXT NOT NULL DEFAULT '',
                meta_title TEXT NOT NULL DEFAULT '',
                meta_roles TEXT NOT NULL DEFAULT '',
                version INTEGER NOT NULL DEFAULT 0
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS role (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL DEFAULT ''
            )"#,
        )
        .execute(&self.pool)
        .await?;

        // No foreign keys on purpose: deleting a menu or role leaves
        // its associations behind, matching the admin UI's contract.
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS menu_role (
                menu_id INTEGER NOT NULL,
                role_id INTEGER NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        debug!("Schema ensured");
        Ok(())
    }
}
