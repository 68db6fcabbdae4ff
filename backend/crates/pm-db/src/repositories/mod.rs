pub mod project_repository;
pub mod task_repository;
pub mod team_member_repository;

pub(crate) mod row_decode;
