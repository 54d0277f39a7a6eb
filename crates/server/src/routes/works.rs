use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::work::WorkStatus;
use service::catalog::domain::WorkUpsert;
use service::catalog::{admin as catalog_admin, query};

use crate::admin::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkView {
    pub id: i32,
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    /// External name for the stored `created_at` column.
    pub date: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub active: bool,
    pub status: WorkStatus,
}

impl From<models::work::Model> for WorkView {
    fn from(m: models::work::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            category: m.category,
            location: m.location,
            date: m.created_at,
            description: m.description,
            image: m.image,
            active: m.status.is_visible(),
            status: m.status,
        }
    }
}

pub async fn list_public(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<WorkView>>, JsonApiError> {
    let rows = query::list_works(&state.db, q.limit).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn list_admin(
    State(state): State<ServerState>,
) -> Result<Json<Vec<WorkView>>, JsonApiError> {
    let rows = catalog_admin::list_all_works(&state.db).await?;
    info!(count = rows.len(), "admin list works");
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn upsert(
    State(state): State<ServerState>,
    Json(input): Json<WorkUpsert>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = catalog_admin::upsert_work(&state.db, input).await?;
    Ok(Json(serde_json::json!({"status": "success", "id": id})))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    catalog_admin::delete_work(&state.db, id).await?;
    Ok(Json(serde_json::json!({"status": "success"})))
}
