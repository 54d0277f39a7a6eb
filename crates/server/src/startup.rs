use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::admin::{AdminAuthConfig, ServerState};
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;

    // Store handle is acquired once here and passed down; released on exit.
    let db = models::db::connect_with_config(&cfg.database).await?;

    // Idempotent: creates the entity tables only if absent, never drops.
    migration::Migrator::up(&db, None).await?;

    let state = ServerState {
        db,
        admin: AdminAuthConfig { api_key: cfg.admin.api_key.clone() },
    };
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
