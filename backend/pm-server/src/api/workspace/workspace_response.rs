use crate::{ProjectDto, TaskDto, TeamMemberDto};

use pm_workspace::WorkspaceSnapshot;

use serde::Serialize;

/// Full workspace for the client's initial load
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceResponse {
    pub projects: Vec<ProjectDto>,
    pub tasks: Vec<TaskDto>,
    pub team_members: Vec<TeamMemberDto>,
}

impl From<WorkspaceSnapshot> for WorkspaceResponse {
    fn from(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            projects: snapshot.projects.into_iter().map(ProjectDto::from).collect(),
            tasks: snapshot.tasks.into_iter().map(TaskDto::from).collect(),
            team_members: snapshot
                .team_members
                .into_iter()
                .map(TeamMemberDto::from)
                .collect(),
        }
    }
}
