pub mod error;
pub mod input;
pub mod outcome;
pub mod progress_sync;
pub mod project_locks;
pub mod seed;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use error::{Result, Result as WorkspaceErrorResult, WorkspaceError};
pub use input::{
    new_project_input::NewProjectInput, new_task_input::NewTaskInput,
    new_team_member_input::NewTeamMemberInput, project_changes::ProjectChanges,
    task_changes::TaskChanges, task_filter::TaskFilter,
    team_member_changes::TeamMemberChanges,
};
pub use outcome::{
    sync_outcome::SyncOutcome, task_change::TaskChange, task_removal::TaskRemoval,
    team_member_view::TeamMemberView, workspace_snapshot::WorkspaceSnapshot,
};
pub use progress_sync::ProgressSynchronizer;
pub use project_locks::{ProjectLockGuard, ProjectLocks};
pub use seed::seed_if_empty;
pub use workspace::Workspace;
