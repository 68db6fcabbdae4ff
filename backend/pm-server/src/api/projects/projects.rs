//! Project REST API handlers

use crate::{
    ApiResult, AppState, CreateProjectRequest, DeleteProjectResponse, ProjectDto,
    ProjectListResponse, ProjectResponse, SyncProjectResponse, UpdateProjectRequest,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state.workspace.list_projects().await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state.workspace.create_project(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: project.into(),
        }),
    ))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state.workspace.get_project(&id).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// PATCH /api/projects/{id}
///
/// Does not resynchronize progress; explicit progress/status values are stored as sent.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state.workspace.update_project(&id, req.into()).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// DELETE /api/projects/{id}
///
/// Removes the project and all of its tasks
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteProjectResponse>> {
    let project_id = state.workspace.delete_project(&id).await?;

    Ok(Json(DeleteProjectResponse {
        project_id: project_id.to_string(),
    }))
}

/// POST /api/projects/{id}/sync
///
/// Recompute progress from the current task set
pub async fn sync_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SyncProjectResponse>> {
    let outcome = state.workspace.resync_project(&id).await?;

    Ok(Json(outcome.into()))
}
