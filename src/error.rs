use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
