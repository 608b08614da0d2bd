use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database URL (default: workdeck.db)
    pub database_url: String,

    /// Database connection pool size (default: 10)
    pub database_max_connections: u32,

    /// JWT secret for HS256 validation
    pub jwt_secret: Option<String>,

    /// JWT public key for RS256 validation (PEM format)
    pub jwt_public_key: Option<String>,

    /// Bounded cache capacity in bytes (default: 32 MiB)
    pub cache_capacity_bytes: u64,

    /// Log level (default: info)
    pub log_level: String,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr =
            parse_bind_addr(&std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()))?;

        let config = Self {
            bind_addr,

            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "workdeck.db".to_string()),

            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            jwt_secret: std::env::var("JWT_SECRET").ok(),
            jwt_public_key: std::env::var("JWT_PUBLIC_KEY").ok(),

            cache_capacity_bytes: std::env::var("CACHE_CAPACITY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(32 * 1024 * 1024),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> ServerErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key) {
            (None, None) => return Err(ServerError::MissingJwtConfig),
            (Some(secret), _) if secret.is_empty() => {
                return Err(ServerError::InvalidConfig {
                    message: "JWT_SECRET must not be empty".to_string(),
                });
            }
            (Some(_), Some(_)) => {
                log::warn!("Both JWT_SECRET and JWT_PUBLIC_KEY provided, using JWT_SECRET (HS256)");
            }
            _ => {}
        }

        if self.database_max_connections == 0 {
            return Err(ServerError::InvalidConfig {
                message: "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            });
        }

        if self.cache_capacity_bytes == 0 {
            return Err(ServerError::InvalidConfig {
                message: "CACHE_CAPACITY_BYTES must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Ports above 65535 or malformed host parts fail here, before any socket
/// is opened.
pub(crate) fn parse_bind_addr(value: &str) -> ServerErrorResult<SocketAddr> {
    value
        .parse()
        .map_err(|source| ServerError::InvalidBindAddr { source })
}
