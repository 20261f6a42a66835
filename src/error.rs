//! Error types for the CoinGecko client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all CoinGecko client operations.
///
/// Every failed call ends in exactly one of these variants. Nothing is replaced
/// by a default value, and nothing is retried unless the builder's `max_retries`
/// is set; a retried failure is classified by its last attempt.
#[derive(Error, Debug)]
pub enum CoinGeckoError {
    /// The API answered with a 4xx or 5xx status code.
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        /// Status code returned by the API
        status: StatusCode,
        /// The URL that was requested
        url: String,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The connection to the API could not be established or was lost.
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest_middleware::Error),

    /// No response arrived within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest_middleware::Error),

    /// Any other request-level failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// The response body was not valid UTF-8 JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl CoinGeckoError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Check if this is a connection error.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect(_))
    }

    /// Check if the API returned an error status.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Check if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// The HTTP status code, if the API returned one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the API rejected the call because of its rate limit (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Find the innermost `reqwest::Error` behind a middleware error, if there is one.
///
/// Retry middleware wraps the last attempt's error in its own `RetryError`, which
/// in turn holds a `reqwest_middleware::Error`. `Reqwest` is transparent, so its
/// `source()` skips the `reqwest::Error` and nested middleware errors are walked
/// explicitly.
fn reqwest_cause(err: &reqwest_middleware::Error) -> Option<&reqwest::Error> {
    match err {
        reqwest_middleware::Error::Reqwest(e) => Some(e),
        reqwest_middleware::Error::Middleware(e) => e.chain().find_map(|cause| {
            if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
                return Some(e);
            }
            if let Some(retry) = cause.downcast_ref::<reqwest_retry::RetryError>() {
                return match retry {
                    reqwest_retry::RetryError::WithRetries { err, .. } => reqwest_cause(err),
                    reqwest_retry::RetryError::Error(err) => reqwest_cause(err),
                };
            }
            cause
                .downcast_ref::<reqwest_middleware::Error>()
                .and_then(reqwest_cause)
        }),
    }
}

impl From<reqwest_middleware::Error> for CoinGeckoError {
    fn from(err: reqwest_middleware::Error) -> Self {
        let (timeout, connect) = reqwest_cause(&err)
            .map_or((false, false), |cause| (cause.is_timeout(), cause.is_connect()));
        if timeout {
            Self::Timeout(err)
        } else if connect {
            Self::Connect(err)
        } else {
            Self::Transport(err)
        }
    }
}

impl From<reqwest::Error> for CoinGeckoError {
    fn from(err: reqwest::Error) -> Self {
        reqwest_middleware::Error::Reqwest(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = CoinGeckoError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://api.example.com/api/v3/ping".to_string(),
            body: "oops".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 500 Internal Server Error from https://api.example.com/api/v3/ping: oops"
        );
        assert!(error.is_status());
        assert!(!error.is_timeout());
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_rate_limited() {
        let error = CoinGeckoError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            url: String::new(),
            body: String::new(),
        };
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = CoinGeckoError::from(err);
        assert!(error.is_decode());
        assert_eq!(error.status(), None);
    }
}
