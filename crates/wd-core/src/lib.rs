pub mod error;
pub mod models;

pub use error::outcome::{Categorized, ErrorCategory, Outcome, classify};
pub use error::{CoreError, Result};
pub use models::notification::Notification;
pub use models::pagination::Pagination;
pub use models::roles;
pub use models::user::User;
pub use models::user_status::UserStatus;
pub use models::workspace::Workspace;
pub use models::workspace_status::WorkspaceStatus;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
