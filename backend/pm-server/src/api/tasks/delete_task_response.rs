use crate::ProjectDto;

use pm_workspace::TaskRemoval;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskResponse {
    pub task_id: String,
    pub project: Option<ProjectDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<TaskRemoval> for DeleteTaskResponse {
    fn from(removal: TaskRemoval) -> Self {
        let warning = removal.sync.warning();
        Self {
            task_id: removal.task.id.to_string(),
            project: removal.sync.into_project().map(ProjectDto::from),
            warning,
        }
    }
}
