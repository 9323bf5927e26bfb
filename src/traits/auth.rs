//! Authentication service trait abstraction.
//!
//! The view layer only ever talks to an [`AuthService`]; whether a session
//! comes from a real identity backend or from the local stub is invisible
//! to it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Login form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registration form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            started_at: Utc::now(),
        }
    }
}

/// Trait for authentication operations.
///
/// # Example
///
/// ```ignore
/// use rpg_forum::traits::{AuthService, Credentials};
///
/// async fn sign_in<A: AuthService>(auth: &A) -> Result<String, AuthError> {
///     let session = auth.login(Credentials::new("hero", "secret")).await?;
///     Ok(session.username)
/// }
/// ```
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Start a session from login credentials.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// Create an account and start a session for it.
    async fn register(&self, registration: Registration) -> Result<Session, AuthError>;

    /// End the current session, if any.
    async fn logout(&self);

    /// The active session, if any.
    fn current_session(&self) -> Option<Session>;

    /// Whether a session is active.
    fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }
}
