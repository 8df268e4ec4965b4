use crate::database::error::StoreError;
use crate::database::models::Role;
use crate::database::pool::DbPool;

pub struct RoleRepository {
    pool: DbPool,
}

impl RoleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Role>, StoreError> {
        let roles = sqlx::query_as::<_, Role>("SELECT id, name FROM role")
            .fetch_all(self.pool.get_pool())
            .await?;

        Ok(roles)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Role>, StoreError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM role WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        Ok(role)
    }

    pub async fn create(&self, name: &str) -> Result<Role, StoreError> {
        let result = sqlx::query("INSERT INTO role (name) VALUES (?)")
            .bind(name)
            .execute(self.pool.get_pool())
            .await?;

        Ok(Role {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<Role, StoreError> {
        let result = sqlx::query("UPDATE role SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(Role {
            id,
            name: name.to_string(),
        })
    }

    /// No cascade: associations referencing this role survive it.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM role WHERE id = ?")
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }
}
