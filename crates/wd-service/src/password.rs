//! Password strength rules and hashing.

use crate::{Result, ServiceError};

use std::fmt::Write;
use std::panic::Location;

use error_location::ErrorLocation;
use sha2::{Digest, Sha256};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Reject passwords that fail the platform strength rules.
pub fn check_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(weak(format!(
            "must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(weak("must contain an uppercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(weak("must contain a lowercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(weak("must contain a digit"));
    }
    Ok(())
}

/// Hash a password for storage.
pub fn hash(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[track_caller]
fn weak(message: impl Into<String>) -> ServiceError {
    ServiceError::WeakPassword {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
