use crate::TeamMemberView;

use pm_core::{Project, Task};

/// Everything in the workspace, in listing order.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub team_members: Vec<TeamMemberView>,
}
