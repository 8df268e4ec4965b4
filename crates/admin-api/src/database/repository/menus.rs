use tracing::debug;

use crate::database::error::StoreError;
use crate::database::models::Menu;
use crate::database::pool::DbPool;

/// Fields of a menu as supplied by the client. The id is assigned by
/// the store on insert and never taken from the payload.
#[derive(Debug, Clone)]
pub struct MenuFields {
    pub parent_id: i64,
    pub name: String,
    pub icon: String,
    pub path: String,
    pub component: String,
    pub redirect: String,
    pub meta_title: String,
    pub meta_roles: String,
    pub version: i64,
}

pub struct MenuRepository {
    pool: DbPool,
}

impl MenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Menu>, StoreError> {
        let menus = sqlx::query_as::<_, Menu>(
            r#"SELECT id, parent_id, name, icon, path, component,
                      redirect, meta_title, meta_roles, version
               FROM menu"#,
        )
        .fetch_all(self.pool.get_pool())
        .await?;

        debug!("Listed {} menus", menus.len());
        Ok(menus)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Menu>, StoreError> {
        let menu = sqlx::query_as::<_, Menu>(
            r#"SELECT id, parent_id, name, icon, path, component,
                      redirect, meta_title, meta_roles, version
               FROM menu WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(self.pool.get_pool())
        .await?;

        Ok(menu)
    }

    /// Insert a menu row. parent_id is taken as-is; nothing checks
    /// that it names an existing menu or that the tree stays acyclic.
    pub async fn create(&self, fields: &MenuFields) -> Result<Menu, StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO menu (parent_id, name, icon, path, component,
                                 redirect, meta_title, meta_roles, version)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(fields.parent_id)
        .bind(&fields.name)
        .bind(&fields.icon)
        .bind(&fields.path)
        .bind(&fields.component)
        .bind(&fields.redirect)
        .bind(&fields.meta_title)
        .bind(&fields.meta_roles)
        .bind(fields.version)
        .execute(self.pool.get_pool())
        .await?;

        Ok(Menu {
            id: result.last_insert_rowid(),
            parent_id: fields.parent_id,
            name: fields.name.clone(),
            icon: fields.icon.clone(),
            path: fields.path.clone(),
            component: fields.component.clone(),
            redirect: fields.redirect.clone(),
            meta_title: fields.meta_title.clone(),
            meta_roles: fields.meta_roles.clone(),
            version: fields.version,
        })
    }

    /// Full overwrite of every column except the id. Zero affected
    /// rows means the id does not exist.
    pub async fn update(&self, id: i64, fields: &MenuFields) -> Result<Menu, StoreError> {
        let result = sqlx::query(
            r#"UPDATE menu SET parent_id = ?, name = ?, icon = ?, path = ?,
                               component = ?, redirect = ?, meta_title = ?,
                               meta_roles = ?, version = ?
               WHERE id = ?"#,
        )
        .bind(fields.parent_id)
        .bind(&fields.name)
        .bind(&fields.icon)
        .bind(&fields.path)
        .bind(&fields.component)
        .bind(&fields.redirect)
        .bind(&fields.meta_title)
        .bind(&fields.meta_roles)
        .bind(fields.version)
        .bind(id)
        .execute(self.pool.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(Menu {
            id,
            parent_id: fields.parent_id,
            name: fields.name.clone(),
            icon: fields.icon.clone(),
            path: fields.path.clone(),
            component: fields.component.clone(),
            redirect: fields.redirect.clone(),
            meta_title: fields.meta_title.clone(),
            meta_roles: fields.meta_roles.clone(),
            version: fields.version,
        })
    }

    /// Single-row delete, no cascade: menu_role rows pointing at the
    /// deleted menu are left behind.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM menu WHERE id = ?")
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }
}
