use pm_workspace::TaskFilter;

use serde::Deserialize;

/// Query parameters for GET /api/tasks
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub assignee_id: Option<String>,
}

impl From<ListTasksQuery> for TaskFilter {
    fn from(query: ListTasksQuery) -> Self {
        Self {
            project_id: query.project_id.filter(|s| !s.is_empty()),
            assignee_id: query.assignee_id.filter(|s| !s.is_empty()),
        }
    }
}
