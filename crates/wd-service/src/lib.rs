pub mod chain;
pub mod error;
pub mod notifications;
pub mod password;
pub mod storage;
pub mod users;
pub mod workspaces;

pub use chain::{Decorator, compose};
pub use error::{Result, ServiceError};

#[cfg(test)]
mod tests;
