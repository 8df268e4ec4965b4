use tracing::{debug, info};

use crate::database::error::StoreError;
use crate::database::models::User;
use crate::database::pool::DbPool;

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Returns the first matching row. The UNIQUE constraint on
    /// username means there is at most one.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = ? LIMIT 1",
        )
        .bind(username)
        .fetch_optional(self.pool.get_pool())
        .await?;

        Ok(user)
    }

    /// Create a user, failing with `UsernameTaken` if the name is in
    /// use. The pre-insert lookup gives the friendly error; the UNIQUE
    /// constraint closes the race between two concurrent registrations.
    pub async fn create(&self, username: &str, password: &str) -> Result<i64, StoreError> {
        if self.find_by_username(username).await?.is_some() {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }

        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(self.pool.get_pool())
            .await
            .map_err(|e| StoreError::from_insert(e, username))?;

        let id = result.last_insert_rowid();
        info!(username, id, "new user registered");

        Ok(id)
    }

    /// Exact plaintext comparison on both fields, reproducing the
    /// legacy behavior. NOT suitable for production credential storage.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(self.pool.get_pool())
        .await?;

        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, password FROM users")
            .fetch_all(self.pool.get_pool())
            .await?;

        debug!("Listed {} users", users.len());
        Ok(users)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool.get_pool())
                .await?;

        Ok(user)
    }

    pub async fn update(
        &self,
        id: i64,
        username: &str,
        password: &str,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE users SET username = ?, password = ? WHERE id = ?")
            .bind(username)
            .bind(password)
            .bind(id)
            .execute(self.pool.get_pool())
            .await
            .map_err(|e| StoreError::from_insert(e, username))?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected())
    }
}
