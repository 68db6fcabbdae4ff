#[derive(Debug, Clone, Default)]
pub struct NewTaskInput {
    /// Must name an existing project
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub assignee_id: Option<String>,
}
