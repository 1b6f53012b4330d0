//! Error types and Result alias for RewardHub

use thiserror::Error;

/// Main error type for the points engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}
