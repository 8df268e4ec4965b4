use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::database::{Role, RoleRepository, StoreError};
use crate::utils::error::ApiError;
use crate::utils::params::parse_id;
use crate::utils::response::{Data, Message};

#[derive(Debug, Deserialize)]
pub struct RolePayload {
    #[serde(default)]
    pub name: String,
}

fn role_not_found(e: StoreError) -> ApiError {
    match e {
        StoreError::RowNotFound => ApiError::NotFound("Role not found".to_string()),
        other => other.into(),
    }
}

/// GET /role
pub async fn list_roles(
    Extension(roles): Extension<Arc<RoleRepository>>,
) -> Result<Json<Data<Vec<Role>>>, ApiError> {
    let all = roles.list().await?;
    Ok(Json(Data::new(all)))
}

/// GET /role/{id}
pub async fn get_role(
    Extension(roles): Extension<Arc<RoleRepository>>,
    Path(id): Path<String>,
) -> Result<Json<Data<Role>>, ApiError> {
    let id = parse_id(&id, "ID")?;

    match roles.get_by_id(id).await? {
        Some(role) => Ok(Json(Data::new(role))),
        None => Err(ApiError::NotFound("Role not found".to_string())),
    }
}

/// POST /role
pub async fn create_role(
    Extension(roles): Extension<Arc<RoleRepository>>,
    Json(payload): Json<RolePayload>,
) -> Result<(StatusCode, Json<Data<Role>>), ApiError> {
    let role = roles.create(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(Data::new(role))))
}

/// PUT /role/{id}
pub async fn update_role(
    Extension(roles): Extension<Arc<RoleRepository>>,
    Path(id): Path<String>,
    Json(payload): Json<RolePayload>,
) -> Result<Json<Data<Role>>, ApiError> {
    let id = parse_id(&id, "ID")?;

    let role = roles.update(id, &payload.name).await.map_err(role_not_found)?;
    Ok(Json(Data::new(role)))
}

/// DELETE /role/{id}
pub async fn delete_role(
    Extension(roles): Extension<Arc<RoleRepository>>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id, "ID")?;

    roles.delete(id).await.map_err(role_not_found)?;
    Ok(Json(Message::new("Role deleted successfully")))
}
