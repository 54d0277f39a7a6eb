use axum::{
    middleware,
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::admin::{self, ServerState};

pub mod dashboard;
pub mod services;
pub mod works;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public read routes plus key-gated
/// admin routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/services", get(services::list_public))
        .route("/api/works", get(works::list_public));

    let admin_routes = Router::new()
        .route("/admin/dashboard", get(dashboard::summary))
        .route("/admin/services", get(services::list_admin).post(services::upsert))
        .route("/admin/services/:id", delete(services::remove))
        .route("/admin/works", get(works::list_admin).post(works::upsert))
        .route("/admin/works/:id", delete(works::remove))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin_key,
        ));

    public
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
