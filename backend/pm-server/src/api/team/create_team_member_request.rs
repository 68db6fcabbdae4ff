use crate::api::json_value;

use pm_workspace::NewTeamMemberInput;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    /// Non-numeric values fall back to the default capacity
    #[serde(default)]
    pub capacity: Option<Value>,
}

impl From<CreateTeamMemberRequest> for NewTeamMemberInput {
    fn from(req: CreateTeamMemberRequest) -> Self {
        Self {
            capacity: json_value::integer(req.capacity.as_ref()),
            name: req.name,
            role: req.role,
        }
    }
}
