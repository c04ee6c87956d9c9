//! Error types for the antigate library.

use thiserror::Error;

/// Main error type for the antigate library.
#[derive(Error, Debug)]
pub enum AntiGateError {
    /// Request URL could not be built from the base URL and operation path
    #[error("Failed to build request URL: {0}")]
    Build(#[from] url::ParseError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-HTTP transport failure
    #[error("Transport failed: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a non-zero `errorId`
    #[error("anti-captcha error {id} ({code}): {description}")]
    Remote {
        id: i64,
        code: String,
        description: String,
    },

    /// Response decoded but is missing something the operation needs
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller cancelled a running solve
    #[error("Solve cancelled")]
    Cancelled,
}

impl AntiGateError {
    /// Whether the error was reported by the service inside a decoded response.
    pub fn is_remote(&self) -> bool {
        matches!(self, AntiGateError::Remote { .. })
    }

    /// The service's error code, e.g. `ERROR_KEY_DOES_NOT_EXIST`.
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            AntiGateError::Remote { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for antigate operations.
pub type Result<T> = std::result::Result<T, AntiGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = AntiGateError::Remote {
            id: 1,
            code: "ERROR_KEY_DOES_NOT_EXIST".into(),
            description: "Account authorization key not found in the system".into(),
        };

        assert!(err.is_remote());
        assert_eq!(err.remote_code(), Some("ERROR_KEY_DOES_NOT_EXIST"));
        assert_eq!(
            err.to_string(),
            "anti-captcha error 1 (ERROR_KEY_DOES_NOT_EXIST): Account authorization key not found in the system"
        );
    }

    #[test]
    fn test_non_remote_has_no_code() {
        assert!(!AntiGateError::Cancelled.is_remote());
        assert_eq!(AntiGateError::Cancelled.remote_code(), None);
    }
}
