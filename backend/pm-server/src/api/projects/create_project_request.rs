use crate::api::json_value;

use pm_workspace::NewProjectInput;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// "Planning", "In Progress", "On Hold" or "Completed"
    #[serde(default)]
    pub status: Option<String>,

    /// Any JSON value; only numbers are kept
    #[serde(default)]
    pub progress: Option<Value>,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub studio_lead: Option<String>,

    /// Team member ids; non-string entries are ignored
    #[serde(default)]
    pub team: Option<Vec<Value>>,
}

impl From<CreateProjectRequest> for NewProjectInput {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            progress: json_value::number(req.progress.as_ref()),
            team: json_value::string_list(req.team.as_deref()),
            name: req.name,
            status: req.status,
            due_date: req.due_date,
            studio_lead: req.studio_lead,
        }
    }
}
