pub mod new_project_input;
pub mod new_task_input;
pub mod new_team_member_input;
pub mod project_changes;
pub mod task_changes;
pub mod task_filter;
pub mod team_member_changes;
