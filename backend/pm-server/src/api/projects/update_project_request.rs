use crate::api::double_option::deserialize_some;
use crate::api::json_value;

use pm_workspace::ProjectChanges;

use serde::Deserialize;
use serde_json::Value;

/// Partial project edit. Absent fields are left untouched; an explicit
/// `null` name or team resets it to the default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub progress: Option<Value>,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub studio_lead: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub team: Option<Option<Vec<Value>>>,
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            name: req.name.map(Option::unwrap_or_default),
            progress: json_value::number(req.progress.as_ref()),
            team: req
                .team
                .map(|team| json_value::string_list(team.as_deref()).unwrap_or_default()),
            status: req.status,
            due_date: req.due_date,
            studio_lead: req.studio_lead,
        }
    }
}
