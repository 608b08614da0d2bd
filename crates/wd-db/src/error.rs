use wd_core::{Categorized, ErrorCategory, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("database: no rows updated {location}")]
    NoRowsUpdated { location: ErrorLocation },

    #[error("database: no rows deleted {location}")]
    NoRowsDeleted { location: ErrorLocation },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl Categorized for DbError {
    fn category(&self) -> ErrorCategory {
        match self {
            // Recognized not-found sentinels come first.
            Self::NoRowsUpdated { .. } | Self::NoRowsDeleted { .. } => ErrorCategory::NotFound,
            Self::Sqlx { source, .. } => match source {
                sqlx::Error::RowNotFound => ErrorCategory::NotFound,
                sqlx::Error::Database(db) if db.is_unique_violation() => ErrorCategory::Conflict,
                _ => ErrorCategory::Internal,
            },
            Self::Migration { .. } | Self::Initialization { .. } => ErrorCategory::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
