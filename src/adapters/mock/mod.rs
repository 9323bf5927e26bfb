//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses
//! - [`InMemoryForum`] - Topics and comments endpoints backed by memory

pub mod forum;
pub mod http;

pub use forum::InMemoryForum;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
