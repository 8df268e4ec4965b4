use crate::database::error::StoreError;
use crate::database::models::MenuRole;
use crate::database::pool::DbPool;

/// Join-table repository. Pairs reference menu and role ids by
/// convention only; inserting a pair for ids that do not exist
/// succeeds silently.
pub struct MenuRoleRepository {
    pool: DbPool,
}

impl MenuRoleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<MenuRole>, StoreError> {
        let pairs = sqlx::query_as::<_, MenuRole>("SELECT menu_id, role_id FROM menu_role")
            .fetch_all(self.pool.get_pool())
            .await?;

        Ok(pairs)
    }

    pub async fn create(&self, menu_id: i64, role_id: i64) -> Result<MenuRole, StoreError> {
        sqlx::query("INSERT INTO menu_role (menu_id, role_id) VALUES (?, ?)")
            .bind(menu_id)
            .bind(role_id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(MenuRole { menu_id, role_id })
    }

    pub async fn delete(&self, menu_id: i64, role_id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM menu_role WHERE menu_id = ? AND role_id = ?")
            .bind(menu_id)
            .bind(role_id)
            .execute(self.pool.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }
}
