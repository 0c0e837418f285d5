use thiserror::Error;

/// Custom error type for remote data source operations
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ConnectError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ConnectError::Decode(err.to_string())
        } else {
            ConnectError::Network(err.to_string())
        }
    }
}

/// Result type for remote data source operations
pub type Result<T> = std::result::Result<T, ConnectError>;
