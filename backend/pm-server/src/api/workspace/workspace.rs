use crate::{ApiResult, AppState, WorkspaceResponse};

use axum::{Json, extract::State};

/// GET /api/workspace
pub async fn get_workspace(State(state): State<AppState>) -> ApiResult<Json<WorkspaceResponse>> {
    let snapshot = state.workspace.snapshot().await?;

    Ok(Json(snapshot.into()))
}
