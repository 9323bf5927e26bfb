//! Client-side session stub.
//!
//! Accepts any well-formed submission and remembers the user name for the
//! lifetime of the process. Nothing is sent anywhere and no token exists.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::info;

use crate::error::{validation, AuthError};
use crate::traits::{AuthService, Credentials, Registration, Session};

#[derive(Debug, Default)]
pub struct LocalAuthService {
    session: Mutex<Option<Session>>,
}

impl LocalAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    fn start(&self, username: &str) -> Session {
        let session = Session::new(username.trim());
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        info!(user = %session.username, "session started");
        session
    }
}

#[async_trait]
impl AuthService for LocalAuthService {
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        validation::require("username", &credentials.username)?;
        validation::require("password", &credentials.password)?;
        Ok(self.start(&credentials.username))
    }

    async fn register(&self, registration: Registration) -> Result<Session, AuthError> {
        validation::require("username", &registration.username)?;
        validation::require_email(&registration.email)?;
        validation::require("password", &registration.password)?;
        Ok(self.start(&registration.username))
    }

    async fn logout(&self) {
        let previous = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(session) = previous {
            info!(user = %session.username, "session ended");
        }
    }

    fn current_session(&self) -> Option<Session> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
