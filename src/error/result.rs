//! Result type alias for forum operations.

use tracing::warn;

use super::forum_error::ForumError;

/// Type alias for Results using ForumError.
pub type ForumResult<T> = Result<T, ForumError>;

/// Extension trait for logging failed forum results in one place.
pub trait ResultExt<T> {
    /// Log the error (if any) under `operation` and pass the result through.
    fn log_failure(self, operation: &str) -> ForumResult<T>;
}

impl<T> ResultExt<T> for ForumResult<T> {
    fn log_failure(self, operation: &str) -> ForumResult<T> {
        if let Err(err) = &self {
            warn!(
                operation,
                code = err.error_code(),
                category = %err.category(),
                "{}",
                err
            );
        }
        self
    }
}
