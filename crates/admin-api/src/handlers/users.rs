use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::database::{User, UserRepository};
use crate::utils::error::ApiError;
use crate::utils::params::parse_id;
use crate::utils::response::Message;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /register
pub async fn register(
    Extension(users): Extension<Arc<UserRepository>>,
    Json(payload): Json<Credentials>,
) -> Result<Json<Value>, ApiError> {
    let id = users.create(&payload.username, &payload.password).await?;

    Ok(Json(json!({
        "code": 1,
        "data": { "id": id }
    })))
}

/// POST /login — plaintext credential comparison, preserved from the
/// legacy backend. A miss is reported as a 400, not a 401.
pub async fn login(
    Extension(users): Extension<Arc<UserRepository>>,
    Json(payload): Json<Credentials>,
) -> Result<Json<User>, ApiError> {
    match users
        .authenticate(&payload.username, &payload.password)
        .await?
    {
        Some(user) => {
            info!(username = %user.username, "login succeeded");
            Ok(Json(user))
        }
        None => Err(ApiError::BadRequest(
            "invalid username or password".to_string(),
        )),
    }
}

/// GET /users
pub async fn list_users(
    Extension(users): Extension<Arc<UserRepository>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let all = users.list().await?;
    Ok(Json(all))
}

/// GET /users/{id}
pub async fn get_user(
    Extension(users): Extension<Arc<UserRepository>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id, "ID")?;

    match users.get_by_id(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::NotFound("User not found".to_string())),
    }
}

/// PUT /users/{id} — full overwrite of both mutable fields.
pub async fn update_user(
    Extension(users): Extension<Arc<UserRepository>>,
    Path(id): Path<String>,
    Json(payload): Json<Credentials>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id, "ID")?;

    let affected = users
        .update(id, &payload.username, &payload.password)
        .await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(Message::new("User updated successfully")))
}

/// DELETE /users/{id}
pub async fn delete_user(
    Extension(users): Extension<Arc<UserRepository>>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id, "ID")?;

    let affected = users.delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(Message::new("User deleted successfully")))
}
