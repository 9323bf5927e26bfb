//! Network-related error types.
//!
//! Everything that can go wrong between issuing a request to the forum API
//! and holding a decoded, 2xx response ends up here.

use std::fmt;
use std::time::Duration;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String, duration_secs: u64 },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Response body did not match the expected shape.
    InvalidResponse { message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Map a transport error for `url` into a network error.
    pub fn from_http(err: HttpError, url: &str, timeout: Duration) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                operation: format!("request to {}", url),
                duration_secs: timeout.as_secs(),
            },
            HttpError::InvalidUrl(message) => NetworkError::Other {
                message: format!("invalid URL {}: {}", url, message),
            },
            HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 408,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Whether the server answered with a 5xx status.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status, .. } if *status >= 500)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Не удалось подключиться к серверу. Проверьте соединение.".to_string()
            }
            NetworkError::Timeout { duration_secs, .. } => {
                format!("Сервер не ответил за {} с.", duration_secs)
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "Запрошенные данные не найдены.".to_string(),
                500..=599 => "Сервер временно недоступен. Попробуйте позже.".to_string(),
                _ => format!("Сервер вернул ошибку (HTTP {}).", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Сервер прислал некорректный ответ.".to_string()
            }
            NetworkError::Other { message } => format!("Сетевая ошибка: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => write!(f, "{} timed out after {} seconds", operation, duration_secs),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => write!(f, "Invalid response: {}", message),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    }
}
