mod patches;
mod project;
mod project_status;
mod task;
mod task_status;
