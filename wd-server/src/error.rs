use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {source}")]
    InvalidBindAddr {
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Missing JWT configuration: set JWT_SECRET or JWT_PUBLIC_KEY")]
    MissingJwtConfig,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },

    #[error("Auth setup error: {0}")]
    Auth(#[from] wd_auth::AuthError),

    #[error("Database error: {0}")]
    Db(#[from] wd_db::DbError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
