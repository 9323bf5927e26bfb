//! Unified error type for the forum client.
//!
//! `ForumError` consolidates the domain-specific error types so that view
//! models can route every failure the same way: toast, inline message, or
//! silent drop.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use super::validation::ValidationError;

/// Unified error type for forum operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForumError {
    /// Transport, status or decoding failures talking to the forum API.
    Network(NetworkError),

    /// A form was submitted with missing or malformed fields.
    Validation(ValidationError),

    /// Login or registration failures.
    Auth(AuthError),
}

impl ForumError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ForumError::Network(err) => match err {
                NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => {
                    ErrorCategory::Network
                }
                NetworkError::HttpStatus { .. } if err.is_server_side() => ErrorCategory::Server,
                NetworkError::Other { .. } => ErrorCategory::Network,
                _ => ErrorCategory::Client,
            },
            ForumError::Validation(_) => ErrorCategory::Validation,
            ForumError::Auth(AuthError::Invalid(_)) => ErrorCategory::Validation,
            ForumError::Auth(_) => ErrorCategory::Auth,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ForumError::Network(err) => err.is_retryable(),
            ForumError::Validation(_) | ForumError::Auth(_) => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ForumError::Network(err) => err.user_message(),
            ForumError::Validation(err) => err.user_message(),
            ForumError::Auth(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ForumError::Network(err) => err.error_code(),
            ForumError::Validation(err) => err.error_code(),
            ForumError::Auth(err) => err.error_code(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ForumError::Network(NetworkError::HttpStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ForumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForumError::Network(err) => write!(f, "[{}] {}", err.error_code(), err),
            ForumError::Validation(err) => write!(f, "[{}] {}", err.error_code(), err),
            ForumError::Auth(err) => write!(f, "[{}] {}", err.error_code(), err),
        }
    }
}

impl std::error::Error for ForumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ForumError::Network(err) => Some(err),
            ForumError::Validation(err) => Some(err),
            ForumError::Auth(err) => Some(err),
        }
    }
}

impl From<NetworkError> for ForumError {
    fn from(err: NetworkError) -> Self {
        ForumError::Network(err)
    }
}

impl From<ValidationError> for ForumError {
    fn from(err: ValidationError) -> Self {
        ForumError::Validation(err)
    }
}

impl From<AuthError> for ForumError {
    fn from(err: AuthError) -> Self {
        ForumError::Auth(err)
    }
}

impl From<serde_json::Error> for ForumError {
    fn from(err: serde_json::Error) -> Self {
        ForumError::Network(NetworkError::from(err))
    }
}
