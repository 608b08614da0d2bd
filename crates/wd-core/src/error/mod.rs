pub mod outcome;

// -------------------------------------------------------------------------- //

use crate::{Categorized, ErrorCategory, ErrorLocation};

use std::result::Result as StdResult;

use thiserror::Error;

/// Failures raised by the domain models themselves, currently the status
/// strings parsed out of storage.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user status: {value} {location}")]
    InvalidUserStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid workspace status: {value} {location}")]
    InvalidWorkspaceStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl Categorized for CoreError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUserStatus { .. } | Self::InvalidWorkspaceStatus { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
