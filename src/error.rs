//! Error types for the NimboCast SDK
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Configuration errors surface synchronously when a descriptor URL is
//! resolved; transport errors surface from individual requests.

use thiserror::Error;

/// The main error type for the NimboCast SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or incomplete configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// The descriptor URL failed to parse
    #[error("Invalid descriptor URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The descriptor URL carries a non-numeric port
    #[error("Invalid port in descriptor URL '{url}'")]
    InvalidPort {
        /// The offending descriptor
        url: String,
    },

    /// The descriptor URL scheme is not http or https
    #[error("Unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme {
        /// The offending scheme
        scheme: String,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The underlying HTTP call failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request did not complete within the transport timeout
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout that was exceeded, in milliseconds
        timeout_ms: u64,
    },

    /// Every attempt within the retry budget failed
    #[error("Retries exhausted after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// The response body was not the expected JSON shape
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything that does not fit the variants above
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is retryable at the transport level
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } => true,
            Error::Status { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the NimboCast SDK
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::InvalidPort {
            url: "http://host:abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid port in descriptor URL 'http://host:abc'"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::status(429, "").is_retryable());
        assert!(Error::status(500, "").is_retryable());
        assert!(Error::status(503, "").is_retryable());

        assert!(!Error::status(400, "").is_retryable());
        assert!(!Error::status(401, "").is_retryable());
        assert!(!Error::status(404, "").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }
}
