use crate::WorkspaceError;

use pm_core::Project;

/// What happened to the owning project after a task mutation.
#[derive(Debug)]
pub enum SyncOutcome {
    Synced(Project),
    /// The project vanished between the task write and the sync
    ProjectMissing,
    /// The task write stands; progress may be stale until the next sync
    Failed(WorkspaceError),
}

impl SyncOutcome {
    pub fn into_project(self) -> Option<Project> {
        match self {
            Self::Synced(project) => Some(project),
            _ => None,
        }
    }

    /// Client-facing warning for a failed sync
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Failed(_) => {
                Some("Project progress could not be updated; retry the sync.".to_string())
            }
            _ => None,
        }
    }
}
