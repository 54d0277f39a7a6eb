use axum::extract::State;
use axum::Json;

use service::catalog::dashboard::{self, DashboardSummary};

use crate::admin::ServerState;
use crate::errors::JsonApiError;

pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<DashboardSummary>, JsonApiError> {
    let summary = dashboard::summary(&state.db).await?;
    Ok(Json(summary))
}
