pub mod authorization;
pub mod claims;
pub mod error;
pub mod identity;
pub mod jwt_validator;
pub mod scope;

pub use authorization::Authorization;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity::Identity;
pub use jwt_validator::JwtValidator;
pub use scope::RequestScope;
