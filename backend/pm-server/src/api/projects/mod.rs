pub mod create_project_request;
pub mod delete_project_response;
pub mod project_dto;
pub mod project_list_response;
pub mod project_response;
pub mod projects;
pub mod sync_project_response;
pub mod update_project_request;
