use wd_core::{Categorized, ErrorCategory};
use wd_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors produced by the service layer.
///
/// Every variant carries its category at construction, so the outer edge can
/// classify an error without inspecting message text. Wrapping variants
/// delegate to their source, which keeps the category stable no matter how
/// many context layers an error picks up on its way out.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database operation failed: {source}")]
    Db {
        #[from]
        source: DbError,
    },

    #[error("{entity} not found")]
    NotFound {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("invalid parameters: {message}")]
    InvalidParameters {
        message: String,
        location: ErrorLocation,
    },

    #[error("password does not meet strength requirements: {message}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} already exists")]
    AlreadyExists {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("{message}: {source}")]
    Context {
        message: String,
        source: Box<ServiceError>,
    },
}

impl ServiceError {
    /// Wrap an error with operation context without changing its category.
    pub fn context(message: impl Into<String>, source: ServiceError) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

impl Categorized for ServiceError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::Db { source } => source.category(),
            Self::Context { source, .. } => source.category(),
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::InvalidParameters { .. } => ErrorCategory::InvalidParameters,
            Self::WeakPassword { .. } => ErrorCategory::WeakCredentials,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
        }
    }
}
