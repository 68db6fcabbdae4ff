pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        delete_project_response::DeleteProjectResponse,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{
            create_project, delete_project, get_project, list_projects, sync_project,
            update_project,
        },
        sync_project_response::SyncProjectResponse,
        update_project_request::UpdateProjectRequest,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        delete_task_response::DeleteTaskResponse,
        list_tasks_query::ListTasksQuery,
        task_change_response::TaskChangeResponse,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        tasks::{create_task, delete_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
    team::{
        create_team_member_request::CreateTeamMemberRequest,
        delete_team_member_response::DeleteTeamMemberResponse,
        team::{create_team_member, delete_team_member, list_team_members, update_team_member},
        team_member_dto::TeamMemberDto,
        team_member_list_response::TeamMemberListResponse,
        team_member_response::TeamMemberResponse,
        update_team_member_request::UpdateTeamMemberRequest,
    },
    workspace::{workspace::get_workspace, workspace_response::WorkspaceResponse},
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
