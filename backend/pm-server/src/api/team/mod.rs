pub mod create_team_member_request;
pub mod delete_team_member_response;
pub mod team;
pub mod team_member_dto;
pub mod team_member_list_response;
pub mod team_member_response;
pub mod update_team_member_request;
