use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies a signed token's structural and temporal validity and produces
/// a [`Claims`] instance. Stateless and cheap to clone behind an `Arc`.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::validation_for(Algorithm::HS256),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create validator with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key =
            DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
                AuthError::InvalidToken {
                    message: format!("Invalid RSA public key: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(Self {
            decoding_key,
            validation: Self::validation_for(Algorithm::RS256),
            algorithm: Algorithm::RS256,
        })
    }

    fn validation_for(algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        // Audience pinning is the token issuer's concern; tokens may carry
        // any audience here.
        validation.validate_aud = false;
        validation
    }

    /// Verify the token envelope and the application claims.
    ///
    /// Malformed, unsigned, expired or not-yet-valid tokens are rejected
    /// before any `Claims` instance escapes. Every rejection produces one
    /// structured failure log entry.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                let err = match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                };
                log::warn!(
                    "token rejected [unit=authentication status=failure cause={}]",
                    err
                );
                err
            })?;

        // Application claim validation logs its own outcome on both paths.
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
