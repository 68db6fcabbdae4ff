use crate::TeamMemberDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberListResponse {
    pub team_members: Vec<TeamMemberDto>,
}
