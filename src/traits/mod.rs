//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, DELETE)
//! - [`AuthService`] - Login, registration and session lookup

pub mod auth;
pub mod http;

pub use auth::{AuthService, Credentials, Registration, Session};
pub use http::{Headers, HttpClient, HttpError, Response};
