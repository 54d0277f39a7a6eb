use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AdminAuthConfig {
    pub api_key: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub admin: AdminAuthConfig,
}

/// Middleware: require a valid admin key (X-Admin-Key header or Bearer
/// token) before any admin route runs; rejected calls never reach the store.
pub async fn require_admin_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let from_header = req
        .headers()
        .get("X-Admin-Key")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let key = match from_header {
        Some(k) => Some(k),
        None => req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|s| s.to_string()),
    };

    match key {
        Some(k) if !k.trim().is_empty() && k == state.admin.api_key => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
