//! Error category classification for unified error handling.
//!
//! Categories drive the handling decision for a failure: whether it is
//! worth retrying, and whether it becomes a toast, an inline form error or
//! nothing at all.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures (connection refused, timeout).
    /// Transient and retryable.
    Network,

    /// The forum API answered with a server-side failure (5xx).
    Server,

    /// The forum API rejected the request (4xx) or sent something we
    /// could not decode.
    Client,

    /// A required field was empty or malformed. Blocked before any request.
    Validation,

    /// Login or registration was rejected.
    Auth,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Whether failures of this category surface as a toast notification.
    ///
    /// Validation and auth failures are shown inline next to the form.
    pub fn shows_toast(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::Client
        )
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Auth => "auth",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
