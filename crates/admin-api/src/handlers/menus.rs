use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::database::{Menu, MenuFields, MenuRepository, StoreError};
use crate::utils::error::ApiError;
use crate::utils::params::parse_id;
use crate::utils::response::{Data, Message};

/// Menu payload for create and update. Any field left out of the JSON
/// body falls back to its zero value, matching the frontend's partial
/// forms.
#[derive(Debug, Deserialize)]
pub struct MenuPayload {
    #[serde(default)]
    pub parent_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub redirect: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_roles: String,
    #[serde(default)]
    pub version: i64,
}

impl From<MenuPayload> for MenuFields {
    fn from(p: MenuPayload) -> Self {
        MenuFields {
            parent_id: p.parent_id,
            name: p.name,
            icon: p.icon,
            path: p.path,
            component: p.component,
            redirect: p.redirect,
            meta_title: p.meta_title,
            meta_roles: p.meta_roles,
            version: p.version,
        }
    }
}

fn menu_not_found(e: StoreError) -> ApiError {
    match e {
        StoreError::RowNotFound => ApiError::NotFound("Menu not found".to_string()),
        other => other.into(),
    }
}

/// GET /menu
pub async fn list_menus(
    Extension(menus): Extension<Arc<MenuRepository>>,
) -> Result<Json<Data<Vec<Menu>>>, ApiError> {
    let all = menus.list().await?;
    Ok(Json(Data::new(all)))
}

/// GET /menu/{id}
pub async fn get_menu(
    Extension(menus): Extension<Arc<MenuRepository>>,
    Path(id): Path<String>,
) -> Result<Json<Data<Menu>>, ApiError> {
    let id = parse_id(&id, "ID")?;

    match menus.get_by_id(id).await? {
        Some(menu) => Ok(Json(Data::new(menu))),
        None => Err(ApiError::NotFound("Menu not found".to_string())),
    }
}

/// POST /menu
pub async fn create_menu(
    Extension(menus): Extension<Arc<MenuRepository>>,
    Json(payload): Json<MenuPayload>,
) -> Result<(StatusCode, Json<Data<Menu>>), ApiError> {
    let menu = menus.create(&payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Data::new(menu))))
}

/// PUT /menu/{id}
pub async fn update_menu(
    Extension(menus): Extension<Arc<MenuRepository>>,
    Path(id): Path<String>,
    Json(payload): Json<MenuPayload>,
) -> Result<Json<Data<Menu>>, ApiError> {
    let id = parse_id(&id, "ID")?;

    let menu = menus
        .update(id, &payload.into())
        .await
        .map_err(menu_not_found)?;

    Ok(Json(Data::new(menu)))
}

/// DELETE /menu/{id}
pub async fn delete_menu(
    Extension(menus): Extension<Arc<MenuRepository>>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id, "ID")?;

    menus.delete(id).await.map_err(menu_not_found)?;

    Ok(Json(Message::new("Menu deleted successfully")))
}
