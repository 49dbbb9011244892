//! Error types for request conversion.

use thiserror::Error;

/// Errors produced while converting a Messages request.
#[derive(Error, Debug)]
pub enum Error {
    /// The request cannot be expressed as a backend payload at all.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error (malformed env values, bad alias tables)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error() {
        let err = Error::invalid_request("No messages provided");
        assert_eq!(err.to_string(), "Invalid request: No messages provided");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad alias");
        assert_eq!(err.to_string(), "Configuration error: bad alias");
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        let err = Error::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
