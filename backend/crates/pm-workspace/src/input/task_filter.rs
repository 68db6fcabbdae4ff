/// Optional filters for task listing; both apply when both are set.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
}
