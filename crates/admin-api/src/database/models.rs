use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Menu entry for the admin frontend. `parent_id` forms a tree by
/// convention (0 = root); nothing validates it, so callers can create
/// orphans or even cycles.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
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

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Join row between menu and role. Identified by the pair; no foreign
/// keys back the references, so rows can dangle after a delete.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MenuRole {
    pub menu_id: i64,
    pub role_id: i64,
}
