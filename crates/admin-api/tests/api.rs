//! End-to-end tests driving the router against an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use admin_api::database::{
    DbPool, MenuRepository, MenuRoleRepository, RoleRepository, UserRepository,
};
use admin_api::router::build_router;

async fn test_app() -> Router {
    // One connection only: every pooled connection to `:memory:`
    // opens a distinct database.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    let db = DbPool::from_pool(pool);
    db.ensure_schema().await.expect("schema");

    build_router(
        Arc::new(UserRepository::new(db.clone())),
        Arc::new(MenuRepository::new(db.clone())),
        Arc::new(RoleRepository::new(db.clone())),
        Arc::new(MenuRoleRepository::new(db)),
    )
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn root_route_returns_demo_payload() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["code"], 1);
    assert_eq!(body["data"]["message"], "Hello World!");
}

#[tokio::test]
async fn register_then_duplicate_conflicts() {
    let app = test_app().await;

    let payload = json!({"username": "alice", "password": "secret"});

    let first = app
        .clone()
        .oneshot(json_request("POST", "/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body = body_json(first).await;
    assert_eq!(body["code"], 1);
    assert!(body["data"]["id"].as_i64().unwrap() > 0);

    let second = app
        .oneshot(json_request("POST", "/register", payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = body_json(second).await;
    assert!(body["error"].as_str().unwrap().contains("alice"));
}

#[tokio::test]
async fn login_matches_exact_credentials_only() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({"username": "a", "password": "b"}),
        ))
        .await
        .unwrap();

    let ok = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"username": "a", "password": "b"}),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    let user = body_json(ok).await;
    assert_eq!(user["username"], "a");
    assert_eq!(user["password"], "b");

    let bad = app
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"username": "a", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_crud_round_trip() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({"username": "dave", "password": "pw"}),
        ))
        .await
        .unwrap();
    let id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let fetched = app
        .clone()
        .oneshot(empty_request("GET", &format!("/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await["username"], "dave");

    let updated = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/users/{}", id),
            json!({"username": "dave", "password": "pw2"}),
        ))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);

    let listed = app
        .clone()
        .oneshot(empty_request("GET", "/users"))
        .await
        .unwrap();
    let users = body_json(listed).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["password"], "pw2");

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let missing = app
        .oneshot(empty_request("GET", &format!("/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn menu_round_trip_preserves_fields() {
    let app = test_app().await;

    let payload = json!({
        "parent_id": 0,
        "name": "system",
        "icon": "gear",
        "path": "/system",
        "component": "Layout",
        "redirect": "/system/users",
        "meta_title": "System",
        "meta_roles": "admin,editor",
        "version": 3
    });

    let created = app
        .clone()
        .oneshot(json_request("POST", "/menu", payload.clone()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body = body_json(created).await;
    let id = created_body["data"]["id"].as_i64().unwrap();

    let fetched = app
        .oneshot(empty_request("GET", &format!("/menu/{}", id)))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let data = body_json(fetched).await["data"].clone();

    for key in [
        "parent_id",
        "name",
        "icon",
        "path",
        "component",
        "redirect",
        "meta_title",
        "meta_roles",
        "version",
    ] {
        assert_eq!(data[key], payload[key], "field {} did not round-trip", key);
    }
}

#[tokio::test]
async fn menu_update_missing_id_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/menu/99999",
            json!({"parent_id": 0, "name": "ghost", "version": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn menu_invalid_id_is_400() {
    let app = test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/menu/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid ID");
}

#[tokio::test]
async fn empty_menu_listing_is_empty_array() {
    let app = test_app().await;

    let response = app.oneshot(empty_request("GET", "/menu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn role_delete_is_idempotent_in_status_only() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/role", json!({"name": "viewer"})))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let first = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/role/{}", id)))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(empty_request("DELETE", &format!("/role/{}", id)))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn association_appears_and_disappears_from_listing() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/menu-role",
            json!({"menu_id": 1, "role_id": 2}),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = body_json(
        app.clone()
            .oneshot(empty_request("GET", "/menu-role"))
            .await
            .unwrap(),
    )
    .await;
    assert!(listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["menu_id"] == 1 && p["role_id"] == 2));

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", "/menu-role/1/2"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let after = body_json(
        app.oneshot(empty_request("GET", "/menu-role"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(after["data"], json!([]));
}

#[tokio::test]
async fn malformed_json_body_is_400() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
