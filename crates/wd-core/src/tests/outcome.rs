use crate::{Categorized, CoreError, ErrorCategory, Outcome, classify};

use std::panic::Location;

use error_location::ErrorLocation;

#[test]
fn given_not_found_category_when_classified_then_not_found() {
    assert_eq!(ErrorCategory::NotFound.outcome(), Outcome::NotFound);
}

#[test]
fn given_validation_family_when_classified_then_invalid_argument() {
    assert_eq!(ErrorCategory::Validation.outcome(), Outcome::InvalidArgument);
    assert_eq!(
        ErrorCategory::InvalidParameters.outcome(),
        Outcome::InvalidArgument
    );
    assert_eq!(
        ErrorCategory::WeakCredentials.outcome(),
        Outcome::InvalidArgument
    );
}

#[test]
fn given_conflict_category_when_classified_then_already_exists() {
    assert_eq!(ErrorCategory::Conflict.outcome(), Outcome::AlreadyExists);
}

#[test]
fn given_unauthorized_category_when_classified_then_unauthenticated() {
    assert_eq!(ErrorCategory::Unauthorized.outcome(), Outcome::Unauthenticated);
}

#[test]
fn given_unknown_failure_when_classified_then_internal() {
    assert_eq!(ErrorCategory::Internal.outcome(), Outcome::Internal);
}

#[test]
fn given_core_errors_when_categorized_then_match_construction_category() {
    let user_status = CoreError::InvalidUserStatus {
        value: "frozen".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    assert_eq!(user_status.category(), ErrorCategory::Validation);
    assert_eq!(classify(&user_status), Outcome::InvalidArgument);

    let workspace_status = CoreError::InvalidWorkspaceStatus {
        value: "paused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    assert_eq!(classify(&workspace_status), Outcome::InvalidArgument);
}

#[test]
fn given_outcomes_when_rendered_then_codes_are_stable() {
    assert_eq!(Outcome::NotFound.code(), "NOT_FOUND");
    assert_eq!(Outcome::InvalidArgument.code(), "INVALID_ARGUMENT");
    assert_eq!(Outcome::AlreadyExists.code(), "ALREADY_EXISTS");
    assert_eq!(Outcome::Unauthenticated.code(), "UNAUTHENTICATED");
    assert_eq!(Outcome::Internal.code(), "INTERNAL");
}
