pub mod create_workspace_request;
pub mod update_workspace_request;
pub mod workspace_dto;
pub mod workspace_list_response;
pub mod workspace_response;
pub mod workspaces;
