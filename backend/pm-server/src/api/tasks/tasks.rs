//! Task REST API handlers
//!
//! Every mutation answers with the owning project as it stands after the
//! progress sync.

use crate::{
    ApiResult, AppState, CreateTaskRequest, DeleteTaskResponse, ListTasksQuery,
    TaskChangeResponse, TaskDto, TaskListResponse, UpdateTaskRequest,
};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// GET /api/tasks?projectId=&assigneeId=
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = state.workspace.list_tasks(query.into()).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskChangeResponse>)> {
    let change = state.workspace.create_task(req.into()).await?;

    Ok((StatusCode::CREATED, Json(change.into())))
}

/// PATCH /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskChangeResponse>> {
    let change = state.workspace.update_task(&id, req.into()).await?;

    Ok(Json(change.into()))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let removal = state.workspace.delete_task(&id).await?;

    Ok(Json(removal.into()))
}
