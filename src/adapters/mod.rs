//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`LocalAuthService`] - In-memory session stub
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses with request recording
//! - [`mock::InMemoryForum`] - A working forum backend held in memory

pub mod local_auth;
pub mod mock;
pub mod reqwest_http;

pub use local_auth::LocalAuthService;
pub use mock::{InMemoryForum, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
