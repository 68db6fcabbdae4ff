pub mod double_option;
pub mod error;
pub mod json_value;
pub mod projects;
pub mod tasks;
pub mod team;
pub mod workspace;
