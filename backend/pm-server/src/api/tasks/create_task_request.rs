use pm_workspace::NewTaskInput;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Required; must reference an existing project
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// Unknown member ids are stored as unassigned
    #[serde(default)]
    pub assignee_id: Option<String>,
}

impl From<CreateTaskRequest> for NewTaskInput {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            project_id: req.project_id,
            name: req.name,
            assignee_id: req.assignee_id,
        }
    }
}
