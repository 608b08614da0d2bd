pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_scope::Auth,
    list_query::ListQuery,
    notifications::{
        notification_dto::NotificationDto,
        notification_list_response::{
            NotificationListResponse, NotificationResponse, UnreadCountResponse,
        },
        notify_request::{BroadcastRequest, NotifyRequest},
    },
    users::{
        create_user_request::CreateUserRequest,
        update_password_request::UpdatePasswordRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
    },
    workspaces::{
        create_workspace_request::CreateWorkspaceRequest,
        update_workspace_request::UpdateWorkspaceRequest,
        workspace_dto::WorkspaceDto,
        workspace_list_response::WorkspaceListResponse,
        workspace_response::WorkspaceResponse,
    },
};

pub use config::Config;
pub use error::{Result, ServerError};
pub use routes::build_router;
pub use state::AppState;
