use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::service::ServiceStatus;
use service::catalog::domain::ServiceUpsert;
use service::catalog::{admin as catalog_admin, query};

use crate::admin::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u64>,
}

/// Admin-facing representation: camelCase fields, explicit `active` flag
/// alongside the stored status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    pub id: i32,
    pub title: String,
    pub short_desc: Option<String>,
    pub full_desc: Option<String>,
    pub icon: String,
    pub image: Option<String>,
    pub active: bool,
    pub order: i32,
    pub status: ServiceStatus,
}

impl From<models::service::Model> for ServiceView {
    fn from(m: models::service::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            short_desc: m.short_desc,
            full_desc: m.full_desc,
            icon: m.icon,
            image: m.image,
            active: m.status.is_active(),
            order: m.order,
            status: m.status,
        }
    }
}

pub async fn list_public(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<ServiceView>>, JsonApiError> {
    let rows = query::list_services(&state.db, q.limit).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn list_admin(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ServiceView>>, JsonApiError> {
    let rows = catalog_admin::list_all_services(&state.db).await?;
    info!(count = rows.len(), "admin list services");
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn upsert(
    State(state): State<ServerState>,
    Json(input): Json<ServiceUpsert>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = catalog_admin::upsert_service(&state.db, input).await?;
    Ok(Json(serde_json::json!({"status": "success", "id": id})))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    catalog_admin::delete_service(&state.db, id).await?;
    Ok(Json(serde_json::json!({"status": "success"})))
}
