use pm_workspace::TeamMemberView;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Team member DTO; `assignedCount` is derived from the current task set
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub id: String,
    pub name: String,
    pub role: String,
    pub capacity: u32,
    pub assigned_count: usize,
    pub over_capacity: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamMemberView> for TeamMemberDto {
    fn from(view: TeamMemberView) -> Self {
        let over_capacity = view.is_over_capacity();
        let m = view.member;
        Self {
            id: m.id.to_string(),
            name: m.name,
            role: m.role,
            capacity: m.capacity,
            assigned_count: view.assigned_count,
            over_capacity,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
