use crate::ProjectDto;

use pm_workspace::SyncOutcome;

use serde::Serialize;

/// Result of an explicit resync. `project` is null when the sync failed.
#[derive(Debug, Serialize)]
pub struct SyncProjectResponse {
    pub project: Option<ProjectDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<SyncOutcome> for SyncProjectResponse {
    fn from(outcome: SyncOutcome) -> Self {
        let warning = outcome.warning();
        Self {
            project: outcome.into_project().map(ProjectDto::from),
            warning,
        }
    }
}
