pub mod notification;
pub mod pagination;
pub mod roles;
pub mod user;
pub mod user_status;
pub mod workspace;
pub mod workspace_status;
