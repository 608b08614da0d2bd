pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::notification_repository::NotificationRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::workspace_repository::WorkspaceRepository;
