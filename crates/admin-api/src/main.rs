use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use admin_api::config::Settings;
use admin_api::database::{
    DbPool, MenuRepository, MenuRoleRepository, RoleRepository, UserRepository,
};
use admin_api::router::build_router;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,admin_api=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting admin API server...");

    let settings = Settings::load()?;
    info!("Configuration loaded");

    // A server without a store cannot serve anything; both failures
    // below abort the process.
    let db_pool = DbPool::new(&settings.database)
        .await
        .context("failed to open database")?;
    db_pool
        .ensure_schema()
        .await
        .context("failed to create schema")?;
    info!("Database ready at {}", settings.database.url);

    let users = Arc::new(UserRepository::new(db_pool.clone()));
    let menus = Arc::new(MenuRepository::new(db_pool.clone()));
    let roles = Arc::new(RoleRepository::new(db_pool.clone()));
    let menu_roles = Arc::new(MenuRoleRepository::new(db_pool));

    let app = build_router(users, menus, roles, menu_roles);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
