use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::database::{MenuRole, MenuRoleRepository, StoreError};
use crate::utils::error::ApiError;
use crate::utils::params::parse_id;
use crate::utils::response::{Data, Message};

#[derive(Debug, Deserialize)]
pub struct MenuRolePayload {
    #[serde(default)]
    pub menu_id: i64,
    #[serde(default)]
    pub role_id: i64,
}

/// GET /menu-role
pub async fn list_menu_roles(
    Extension(menu_roles): Extension<Arc<MenuRoleRepository>>,
) -> Result<Json<Data<Vec<MenuRole>>>, ApiError> {
    let all = menu_roles.list().await?;
    Ok(Json(Data::new(all)))
}

/// POST /menu-role — no existence check against the menu and role
/// tables; a pair for ids that were never created inserts fine.
pub async fn create_menu_role(
    Extension(menu_roles): Extension<Arc<MenuRoleRepository>>,
    Json(payload): Json<MenuRolePayload>,
) -> Result<(StatusCode, Json<Data<MenuRole>>), ApiError> {
    let pair = menu_roles
        .create(payload.menu_id, payload.role_id)
        .await?;

    Ok((StatusCode::CREATED, Json(Data::new(pair))))
}

/// DELETE /menu-role/{menu_id}/{role_id}
pub async fn delete_menu_role(
    Extension(menu_roles): Extension<Arc<MenuRoleRepository>>,
    Path((menu_id, role_id)): Path<(String, String)>,
) -> Result<Json<Message>, ApiError> {
    let menu_id = parse_id(&menu_id, "Menu ID")?;
    let role_id = parse_id(&role_id, "Role ID")?;

    menu_roles.delete(menu_id, role_id).await.map_err(|e| match e {
        StoreError::RowNotFound => {
            ApiError::NotFound("Menu-Role relationship not found".to_string())
        }
        other => other.into(),
    })?;

    Ok(Json(Message::new(
        "Menu-Role relationship deleted successfully",
    )))
}
