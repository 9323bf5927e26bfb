//! Unified error handling for the forum client.
//!
//! - **Error Categories**: routing decisions (retry, toast, inline)
//! - **Domain-specific Errors**: Network, Validation and Auth errors
//! - **Unified Error Type**: `ForumError` consolidates them
//! - **Result Type Alias**: `ForumResult<T>`
//!
//! | Category | Description | Retryable | Surfaces as |
//! |----------|-------------|-----------|-------------|
//! | Network | Connection refused, timeout | Yes | Toast |
//! | Server | 5xx from the API | Yes | Toast |
//! | Client | 4xx, undecodable body | No | Toast |
//! | Validation | Empty or malformed field | No | Inline |
//! | Auth | Rejected credentials | No | Inline |

mod auth;
mod category;
mod forum_error;
mod network;
mod result;
pub mod validation;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use forum_error::ForumError;
pub use network::NetworkError;
pub use result::{ForumResult, ResultExt};
pub use validation::ValidationError;
