use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTeamMemberResponse {
    pub member_id: String,
}
