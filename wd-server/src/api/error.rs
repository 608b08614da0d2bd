//! REST API error type.
//!
//! Errors are classified into an [`Outcome`] exactly once, when they cross
//! into this type. The outcome alone decides the HTTP status and the
//! machine-readable code in the body; message text never influences it.

use wd_auth::AuthError;
use wd_core::{Outcome, classify};
use wd_service::ServiceError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable code (e.g., "NOT_FOUND", "INVALID_ARGUMENT")
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// A classified error ready to leave the process.
#[derive(Debug)]
pub struct ApiError {
    outcome: Outcome,
    message: String,
    field: Option<String>,
}

impl ApiError {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let outcome = classify(&e);
        // Internal causes stay in the log; clients get a generic message.
        let message = if outcome == Outcome::Internal {
            log::error!("request failed [unit=api cause={e}]");
            "internal error".to_string()
        } else {
            log::warn!("request rejected [unit=api outcome={outcome:?} cause={e}]");
            e.to_string()
        };

        Self {
            outcome,
            message,
            field: field_of(&e).map(str::to_string),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        log::warn!("request rejected [unit=api cause={e}]");
        let message = match &e {
            AuthError::TokenExpired { .. } => "token expired",
            AuthError::PermissionDenied { .. } => "permission denied",
            _ => "authentication required",
        };
        Self {
            outcome: classify(&e),
            message: message.to_string(),
            field: None,
        }
    }
}

fn field_of(e: &ServiceError) -> Option<&'static str> {
    match e {
        ServiceError::Validation { field, .. } => Some(field),
        ServiceError::Context { source, .. } => field_of(source),
        _ => None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.outcome {
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::InvalidArgument => StatusCode::BAD_REQUEST,
            Outcome::AlreadyExists => StatusCode::CONFLICT,
            Outcome::Unauthenticated => StatusCode::UNAUTHORIZED,
            Outcome::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ApiErrorBody {
            code: self.outcome.code(),
            message: self.message,
            field: self.field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
