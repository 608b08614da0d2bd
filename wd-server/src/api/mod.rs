pub mod auth;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod list_query;
pub mod notifications;
pub mod users;
pub mod workspaces;
