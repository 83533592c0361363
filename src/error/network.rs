//! Network-related error types.
//!
//! Errors produced while talking to the remote photo source. These are the
//! structured payloads the state machine retains in `Failed` for display.

use std::fmt;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the remote source failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by the remote source.
    RateLimited { retry_after_secs: Option<u64> },

    /// Response body could not be read or decoded at the transport level.
    InvalidResponse { message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    ///
    /// The feed core never retries on its own; this classification is for
    /// callers deciding whether to offer a retry affordance.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 408,
            NetworkError::RateLimited { .. } => true,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message for display next to the feed.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the photo service. Check your internet connection.".to_string()
            }
            NetworkError::Timeout { operation } => {
                format!("The {} request timed out. The service may be slow or unreachable.", operation)
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                401 | 403 => "The photo service rejected the access key.".to_string(),
                404 => "The requested photos were not found.".to_string(),
                500..=599 => "The photo service is having trouble. Try again later.".to_string(),
                _ => format!("The photo service returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => format!("Too many requests. Wait {} seconds and try again.", secs),
                None => "Too many requests. Wait a moment and try again.".to_string(),
            },
            NetworkError::InvalidResponse { .. } => {
                "The photo service sent a response that could not be read.".to_string()
            }
            NetworkError::Other { .. } => "Something went wrong talking to the photo service.".to_string(),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "connection to {} failed: {}", url, message)
            }
            NetworkError::Timeout { operation } => write!(f, "{} timed out", operation),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => write!(f, "rate limited, retry after {}s", secs),
                None => write!(f, "rate limited"),
            },
            NetworkError::InvalidResponse { message } => {
                write!(f, "invalid response: {}", message)
            }
            NetworkError::Other { message } => write!(f, "network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a `reqwest::Error` into a [`NetworkError`].
///
/// Used at the adapter boundary; the `operation` name shows up in timeout
/// messages ("feed page", "search page").
pub fn classify_reqwest_error(err: &reqwest::Error, operation: &str, url: &str) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout {
            operation: operation.to_string(),
        }
    } else if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}
