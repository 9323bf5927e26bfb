//! Authentication error types.

use thiserror::Error;

use super::validation::ValidationError;

/// Errors returned by an [`AuthService`](crate::traits::AuthService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The submitted form did not pass validation.
    #[error("invalid credentials form: {0}")]
    Invalid(#[from] ValidationError),

    /// The backend refused the credentials.
    #[error("credentials rejected: {reason}")]
    Rejected { reason: String },

    /// An operation needed a session and there is none.
    #[error("not signed in")]
    NotAuthenticated,
}

impl AuthError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Invalid(err) => err.user_message(),
            AuthError::Rejected { .. } => "Неверный логин или пароль".to_string(),
            AuthError::NotAuthenticated => "Войдите, чтобы продолжить".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Invalid(err) => err.error_code(),
            AuthError::Rejected { .. } => "E_AUTH_REJECTED",
            AuthError::NotAuthenticated => "E_AUTH_NONE",
        }
    }
}
