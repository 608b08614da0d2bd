//! Process-wide role name constants.
//!
//! These are immutable lookup tables initialized once; role policy itself
//! lives with the callers that construct an `Authorization`.

/// Full administrative access within a tenant
pub const ADMIN: &str = "admin";

/// Any logged-in user
pub const AUTHENTICATED: &str = "authenticated";

/// Machine-to-machine callers (no human user behind the token)
pub const SERVICE: &str = "service";

/// Every role name the platform recognizes.
pub const ALL: &[&str] = &[ADMIN, AUTHENTICATED, SERVICE];

/// Check a role name against the recognized set.
pub fn is_known(role: &str) -> bool {
    ALL.contains(&role)
}
