use crate::{RequestScope, Result as AuthErrorResult};

/// Identity extracted once at the authorization boundary.
///
/// Downstream business calls receive tenant and user ids as explicit
/// parameters taken from this value, never re-derived from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub tenant_id: u64,
    /// 0 for technical callers operating at tenant level
    pub user_id: u64,
    pub roles: Vec<String>,
}

impl Identity {
    /// Extract the identity from a request scope.
    ///
    /// Fails when the scope carries no claims or an invalid tenant; a zero
    /// user id passes through unchanged.
    #[track_caller]
    pub fn from_scope(scope: &RequestScope) -> AuthErrorResult<Self> {
        let tenant_id = scope.tenant_id()?;
        let user_id = scope.user_id()?;
        Ok(Self {
            tenant_id,
            user_id,
            roles: scope.roles().to_vec(),
        })
    }
}
