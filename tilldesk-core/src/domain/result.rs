//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection error: {0}")]
    Http(String),

    #[error("Backend error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors that mean the backend rejected the credentials,
    /// as opposed to transport or server failures.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Api {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error: HTTP 500: internal error");

        let err = Error::validation("bad input");
        assert!(err.to_string().contains("Validation error"));
    }

    #[test]
    fn test_auth_rejection_classification() {
        assert!(Error::auth("invalid token").is_auth_rejection());
        assert!(!Error::Http("timeout".to_string()).is_auth_rejection());
        assert!(!Error::Api { status: 500, message: "oops".into() }.is_auth_rejection());
    }
}
