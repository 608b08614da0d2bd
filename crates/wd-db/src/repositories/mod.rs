pub mod notification_repository;
pub mod user_repository;
pub mod workspace_repository;

// -------------------------------------------------------------------------- //

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Convert a stored unix timestamp back to a `DateTime`.
#[track_caller]
pub(crate) fn timestamp(field: &str, secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("invalid timestamp in {}", field),
        location: ErrorLocation::from(Location::caller()),
    })
}
