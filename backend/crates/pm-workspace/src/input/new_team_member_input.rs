#[derive(Debug, Clone, Default)]
pub struct NewTeamMemberInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub capacity: Option<i64>,
}
