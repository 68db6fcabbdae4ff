use crate::{Project, ProjectStatus};

use uuid::Uuid;

/// Partial update for a project. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub due_date: Option<String>,
    pub studio_lead: Option<String>,
    pub team: Option<Vec<Uuid>>,
}

impl ProjectPatch {
    /// Patch carrying only derived progress fields, as written by synchronization
    pub fn progress(progress: u8, status: Option<ProjectStatus>) -> Self {
        Self {
            progress: Some(progress),
            status,
            ..Self::default()
        }
    }

    /// Overwrite the fields present in this patch. Does not touch `updated_at`.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(progress) = self.progress {
            project.progress = progress.min(100);
        }
        if let Some(due_date) = &self.due_date {
            project.due_date = due_date.clone();
        }
        if let Some(studio_lead) = &self.studio_lead {
            project.studio_lead = studio_lead.clone();
        }
        if let Some(team) = &self.team {
            project.team = team.clone();
        }
    }
}
