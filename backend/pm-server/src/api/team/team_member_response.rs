use crate::TeamMemberDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TeamMemberResponse {
    pub member: TeamMemberDto,
}
