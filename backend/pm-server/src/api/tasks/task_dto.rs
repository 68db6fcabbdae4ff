use pm_core::Task;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub status: String,
    pub assignee_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            name: t.name,
            status: t.status.as_str().to_string(),
            assignee_id: t.assignee_id.map(|id| id.to_string()),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
