use axum::{
    extract::Extension,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::{MenuRepository, MenuRoleRepository, RoleRepository, UserRepository};
use crate::handlers;

/// Assemble the full route table. Repositories come in as extensions
/// so handlers stay free of construction concerns; CORS is wide open,
/// matching the admin frontend's cross-origin deployment.
pub fn build_router(
    users: Arc<UserRepository>,
    menus: Arc<MenuRepository>,
    roles: Arc<RoleRepository>,
    menu_roles: Arc<MenuRoleRepository>,
) -> Router {
    Router::new()
        .route("/", post(handlers::health::demo))
        // Users
        .route("/register", post(handlers::users::register))
        .route("/login", post(handlers::users::login))
        .route("/users", get(handlers::users::list_users))
        .route("/users/{id}", get(handlers::users::get_user))
        .route("/users/{id}", put(handlers::users::update_user))
        .route("/users/{id}", delete(handlers::users::delete_user))
        // Menus
        .route("/menu", get(handlers::menus::list_menus))
        .route("/menu", post(handlers::menus::create_menu))
        .route("/menu/{id}", get(handlers::menus::get_menu))
        .route("/menu/{id}", put(handlers::menus::update_menu))
        .route("/menu/{id}", delete(handlers::menus::delete_menu))
        // Roles
        .route("/role", get(handlers::roles::list_roles))
        .route("/role", post(handlers::roles::create_role))
        .route("/role/{id}", get(handlers::roles::get_role))
        .route("/role/{id}", put(handlers::roles::update_role))
        .route("/role/{id}", delete(handlers::roles::delete_role))
        // Menu-role associations
        .route("/menu-role", get(handlers::menu_roles::list_menu_roles))
        .route("/menu-role", post(handlers::menu_roles::create_menu_role))
        .route(
            "/menu-role/{menu_id}/{role_id}",
            delete(handlers::menu_roles::delete_menu_role),
        )
        .layer(Extension(users))
        .layer(Extension(menus))
        .layer(Extension(roles))
        .layer(Extension(menu_roles))
        .layer(
            CorsLayer::permissive()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
