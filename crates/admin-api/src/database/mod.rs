pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::StoreError;
pub use models::*;
pub use pool::DbPool;
pub use repository::{MenuFields, MenuRepository, MenuRoleRepository, RoleRepository, UserRepository};

/// In-memory pool with the schema applied, for repository tests.
/// Pinned to one connection: every pooled connection to `:memory:`
/// opens a distinct database.
#[cfg(test)]
pub async fn test_pool() -> DbPool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    let db = DbPool::from_pool(pool);
    db.ensure_schema().await.expect("schema");
    db
}
