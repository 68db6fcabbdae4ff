//! Team member REST API handlers

use crate::{
    ApiResult, AppState, CreateTeamMemberRequest, DeleteTeamMemberResponse, TeamMemberDto,
    TeamMemberListResponse, TeamMemberResponse, UpdateTeamMemberRequest,
};

use pm_workspace::TeamMemberView;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/team
///
/// Alphabetical by name
pub async fn list_team_members(
    State(state): State<AppState>,
) -> ApiResult<Json<TeamMemberListResponse>> {
    let members = state.workspace.list_team_members().await?;

    Ok(Json(TeamMemberListResponse {
        team_members: members.into_iter().map(TeamMemberDto::from).collect(),
    }))
}

/// POST /api/team
pub async fn create_team_member(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamMemberRequest>,
) -> ApiResult<(StatusCode, Json<TeamMemberResponse>)> {
    let member = state.workspace.create_team_member(req.into()).await?;

    // A new member has no tasks yet
    Ok((
        StatusCode::CREATED,
        Json(TeamMemberResponse {
            member: TeamMemberView::new(member, &[]).into(),
        }),
    ))
}

/// PATCH /api/team/{id}
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTeamMemberRequest>,
) -> ApiResult<Json<TeamMemberResponse>> {
    let view = state.workspace.update_team_member(&id, req.into()).await?;

    Ok(Json(TeamMemberResponse {
        member: view.into(),
    }))
}

/// DELETE /api/team/{id}
///
/// Tasks and project teams keep pointing at the removed id
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteTeamMemberResponse>> {
    let member_id = state.workspace.delete_team_member(&id).await?;

    Ok(Json(DeleteTeamMemberResponse {
        member_id: member_id.to_string(),
    }))
}
