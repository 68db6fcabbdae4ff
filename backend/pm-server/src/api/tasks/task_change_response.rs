use crate::{ProjectDto, TaskDto};

use pm_workspace::TaskChange;

use serde::Serialize;

/// A created or updated task plus the owning project after synchronization.
/// `project` is null and `warning` is set when the sync did not go through.
#[derive(Debug, Serialize)]
pub struct TaskChangeResponse {
    pub task: TaskDto,
    pub project: Option<ProjectDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<TaskChange> for TaskChangeResponse {
    fn from(change: TaskChange) -> Self {
        let warning = change.sync.warning();
        Self {
            task: change.task.into(),
            project: change.sync.into_project().map(ProjectDto::from),
            warning,
        }
    }
}
