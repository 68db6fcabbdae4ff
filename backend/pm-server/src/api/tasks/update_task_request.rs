use crate::api::double_option::deserialize_some;

use pm_workspace::TaskChanges;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// "To Do", "Assigned", "In Progress" or "Done"
    #[serde(default)]
    pub status: Option<String>,

    /// Absent leaves the assignee alone, `null` clears it
    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignee_id: Option<Option<String>>,
}

impl From<UpdateTaskRequest> for TaskChanges {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            name: req.name,
            status: req.status,
            assignee_id: req.assignee_id,
        }
    }
}
