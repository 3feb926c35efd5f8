use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream API returned status {status}")]
    Upstream { status: u16 },

    #[error("Upstream request failed: {0}")]
    Network(String),

    #[error("Upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Item not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound => 404,
            Error::Validation(_) => 400,
            Error::Upstream { .. } | Error::Network(_) => 502,
            Error::Timeout(_) => 504,
            Error::Configuration(_) => 503,
            _ => 500,
        }
    }

    /// Whether another attempt against the upstream may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Upstream { .. } | Error::Network(_) | Error::Timeout(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Upstream {
                status: status.as_u16(),
            },
            None => Error::Network(err.to_string()),
        }
    }
}
