use crate::api::json_value;

use pm_workspace::TeamMemberChanges;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub capacity: Option<Value>,
}

impl From<UpdateTeamMemberRequest> for TeamMemberChanges {
    fn from(req: UpdateTeamMemberRequest) -> Self {
        Self {
            capacity: json_value::integer(req.capacity.as_ref()),
            name: req.name,
            role: req.role,
        }
    }
}
