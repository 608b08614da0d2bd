//! Closed error taxonomy surfaced at the transport boundary.
//!
//! Every error that can cross a service boundary carries an [`ErrorCategory`]
//! assigned at construction time. The transport layer calls [`classify`] exactly
//! once, at the outermost edge, to turn an error into one of the five
//! [`Outcome`] kinds. New business error categories register their outcome
//! here instead of leaking transport concerns into business code.

use serde::Serialize;

/// Transport-level outcome of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Requested resource does not exist for the given tenant scope
    NotFound,
    /// Request failed structural/business validation, or credentials too weak
    InvalidArgument,
    /// Uniqueness/conflict constraint violated
    AlreadyExists,
    /// Token invalid/expired, or explicit authorization denial
    Unauthenticated,
    /// Unclassified failure (storage fault, unexpected defect)
    Internal,
}

impl Outcome {
    /// Stable machine-readable code for the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Internal => "INTERNAL",
        }
    }
}

/// Category attached to an error when it is constructed.
///
/// Categories are finer-grained than outcomes so that storage sentinels
/// (no rows updated/deleted) and business conditions (weak credentials)
/// keep their identity until the single classification point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Recognized "no rows"/"nothing updated"/"nothing deleted" condition
    NotFound,
    /// Structural/constraint validation failure
    Validation,
    /// Request parameters are semantically invalid
    InvalidParameters,
    /// Supplied credentials do not meet the strength policy
    WeakCredentials,
    /// Uniqueness/conflict violation
    Conflict,
    /// Authentication or authorization failure
    Unauthorized,
    /// Everything else
    Internal,
}

impl ErrorCategory {
    /// The ordered classification table. Checks are mutually exclusive by
    /// construction; the first match wins, the generic fallback comes last.
    pub fn outcome(self) -> Outcome {
        match self {
            Self::NotFound => Outcome::NotFound,
            Self::Validation | Self::InvalidParameters | Self::WeakCredentials => {
                Outcome::InvalidArgument
            }
            Self::Conflict => Outcome::AlreadyExists,
            Self::Unauthorized => Outcome::Unauthenticated,
            Self::Internal => Outcome::Internal,
        }
    }
}

/// Implemented by every error enum that can reach the transport boundary.
///
/// Wrapping variants must delegate to their source so that the category of
/// the root cause survives arbitrarily deep error chains.
pub trait Categorized {
    fn category(&self) -> ErrorCategory;
}

/// Map an error to its transport-level outcome.
///
/// Pure and total: never fails, never panics, for any input.
pub fn classify<E: Categorized + ?Sized>(err: &E) -> Outcome {
    err.category().outcome()
}
