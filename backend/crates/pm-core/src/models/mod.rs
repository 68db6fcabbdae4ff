pub mod project;
pub mod project_patch;
pub mod project_status;
pub mod task;
pub mod task_patch;
pub mod task_status;
pub mod team_member;
pub mod team_member_patch;
