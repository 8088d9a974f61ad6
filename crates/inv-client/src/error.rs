//! Error types for backend requests.

use inv_model::ModelError;
use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request was attempted without an authenticated session.
    #[error("no authenticated session")]
    Unauthenticated,

    /// The server rejected the credentials (401 or 403).
    #[error("request rejected with status {status}")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
    },

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("server error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Failed to parse JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The request body failed validation before sending.
    #[error("invalid request: {0}")]
    Invalid(#[from] ModelError),
}

impl ClientError {
    /// Returns a short message suitable for showing to an operator.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Unauthenticated => "Sign in first: no session token was provided.",
            Self::Unauthorized { .. } => "The session was rejected. Please sign in again.",
            Self::NotFound(_) => "The requested record was not found.",
            Self::Network(_) => "Could not reach the server. Please check the connection.",
            Self::Invalid(_) => "Some required fields are empty.",
            Self::Status { .. } | Self::InvalidBaseUrl(_) | Self::JsonParse(_) => {
                "An unexpected error occurred."
            }
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert!(
            ClientError::Unauthenticated
                .user_message()
                .contains("Sign in")
        );
        let err = ClientError::Invalid(ModelError::MissingField("alamat"));
        assert!(err.to_string().contains("alamat"));
    }

    #[test]
    fn test_retryable() {
        assert!(ClientError::Network("timeout".to_string()).is_retryable());
        assert!(
            ClientError::Status {
                status: 503,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!ClientError::Unauthorized { status: 401 }.is_retryable());
        assert!(!ClientError::Unauthenticated.is_retryable());
    }
}
