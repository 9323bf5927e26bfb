//! When a failed request is worth a second attempt.
//!
//! Reads (`GET`) and deletes are idempotent on the forum API, so any
//! transport failure may be retried. A create (`POST`) that timed out may
//! already have been applied, so it is retried only when the connection was
//! never established.

use std::time::Duration;

use crate::traits::HttpError;

/// HTTP verbs used against the forum API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded retry on transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Whether attempt number `attempt` (0-based) that failed with `err`
    /// should be followed by another one.
    pub fn should_retry(&self, method: Method, err: &HttpError, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        match method {
            Method::Get | Method::Delete => err.is_network_failure(),
            Method::Post => err.is_connect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refused() -> HttpError {
        HttpError::ConnectionFailed("refused".to_string())
    }

    fn timed_out() -> HttpError {
        HttpError::Timeout("10s".to_string())
    }

    #[test]
    fn test_reads_and_deletes_retry_on_any_network_failure() {
        let policy = RetryPolicy::default();
        for method in [Method::Get, Method::Delete] {
            assert!(policy.should_retry(method, &refused(), 0));
            assert!(policy.should_retry(method, &timed_out(), 0));
        }
    }

    #[test]
    fn test_create_retries_only_when_never_connected() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(Method::Post, &refused(), 0));
        assert!(!policy.should_retry(Method::Post, &timed_out(), 0));
    }

    #[test]
    fn test_single_retry_budget() {
        let policy = RetryPolicy::default();
        assert!(!policy.should_retry(Method::Get, &refused(), 1));
        assert!(!RetryPolicy::new(0).should_retry(Method::Get, &refused(), 0));
    }

    #[test]
    fn test_other_errors_never_retry() {
        let policy = RetryPolicy::default();
        assert!(!policy.should_retry(Method::Get, &HttpError::InvalidUrl("x".into()), 0));
        assert!(!policy.should_retry(Method::Get, &HttpError::Io("eof".into()), 0));
    }
}
