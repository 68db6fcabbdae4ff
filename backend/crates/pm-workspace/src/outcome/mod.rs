pub mod sync_outcome;
pub mod task_change;
pub mod task_removal;
pub mod team_member_view;
pub mod workspace_snapshot;
