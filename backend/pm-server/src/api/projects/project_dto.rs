use pm_core::Project;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub status: String,
    pub progress: u8,
    pub due_date: String,
    pub studio_lead: String,
    pub team: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            status: p.status.as_str().to_string(),
            progress: p.progress,
            due_date: p.due_date,
            studio_lead: p.studio_lead,
            team: p.team.iter().map(ToString::to_string).collect(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
