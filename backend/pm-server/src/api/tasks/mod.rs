pub mod create_task_request;
pub mod delete_task_response;
pub mod list_tasks_query;
pub mod task_change_response;
pub mod task_dto;
pub mod task_list_response;
pub mod tasks;
pub mod update_task_request;
