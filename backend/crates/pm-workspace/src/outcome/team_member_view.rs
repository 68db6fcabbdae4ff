use pm_core::{Task, TeamMember};

/// A team member with its derived assignment count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMemberView {
    pub member: TeamMember,
    pub assigned_count: usize,
}

impl TeamMemberView {
    pub fn new(member: TeamMember, tasks: &[Task]) -> Self {
        let assigned_count = tasks
            .iter()
            .filter(|t| t.assignee_id == Some(member.id))
            .count();

        Self {
            member,
            assigned_count,
        }
    }

    pub fn is_over_capacity(&self) -> bool {
        self.member.is_over_capacity(self.assigned_count)
    }
}
