//! Client configuration.
//!
//! Defaults point at the hosted forum API. Environment variables override
//! the defaults and command-line flags override the environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Hosted topics endpoint.
pub const DEFAULT_TOPICS_URL: &str =
    "https://functions.poehali.dev/328c3058-ab64-4ab9-8b8f-877651fd3d3a";
/// Hosted comments endpoint.
pub const DEFAULT_COMMENTS_URL: &str =
    "https://functions.poehali.dev/0bc8a12a-714d-4da4-a69e-45194b563fbf";
/// Per-request timeout when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_TOPICS_URL: &str = "RPG_FORUM_TOPICS_URL";
pub const ENV_COMMENTS_URL: &str = "RPG_FORUM_COMMENTS_URL";
pub const ENV_TIMEOUT_SECS: &str = "RPG_FORUM_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "RPG_FORUM_LOG_FILE";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

/// Configuration for the forum client.
///
/// # Example
///
/// ```ignore
/// use rpg_forum::config::ForumConfig;
///
/// let config = ForumConfig::default()
///     .with_topics_url("http://localhost:8080/topics")
///     .with_timeout(std::time::Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumConfig {
    /// Topics endpoint (list, create, delete)
    pub topics_url: String,
    /// Comments endpoint (list by topic, create, delete)
    pub comments_url: String,
    /// Upper bound for a single request attempt
    pub timeout: Duration,
    /// Extra attempts after a retryable network failure
    pub max_retries: u32,
    /// Where tracing output goes; `None` picks the data-directory default
    pub log_file: Option<PathBuf>,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            topics_url: DEFAULT_TOPICS_URL.to_string(),
            comments_url: DEFAULT_COMMENTS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 1,
            log_file: None,
        }
    }
}

impl ForumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topics_url(mut self, url: impl Into<String>) -> Self {
        self.topics_url = url.into();
        self
    }

    pub fn with_comments_url(mut self, url: impl Into<String>) -> Self {
        self.comments_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Create config from the `RPG_FORUM_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = read(ENV_TOPICS_URL) {
            config.topics_url = parse_url(ENV_TOPICS_URL, &url)?;
        }
        if let Some(url) = read(ENV_COMMENTS_URL) {
            config.comments_url = parse_url(ENV_COMMENTS_URL, &url)?;
        }
        if let Some(secs) = read(ENV_TIMEOUT_SECS) {
            config.timeout = parse_timeout(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(path) = read(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }
        Ok(config)
    }
}

/// Accept only absolute http(s) URLs.
pub fn parse_url(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        })
    }
}

/// Parse a positive whole number of seconds.
pub fn parse_timeout(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var,
            value: value.to_string(),
        }),
    }
}
