//! Error types for IP lookups.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level without dictating
/// recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a geolocation lookup.
///
/// Every variant means the same thing to the monitor ("no data this tick"),
/// but the variants keep transport failures apart from answers the service
/// itself refused.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service answered with a non-2xx status.
    #[error("Service returned HTTP {0}")]
    Status(http::StatusCode),

    /// The body was not the expected JSON document.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered but reported a failure in its own `status` field.
    #[error("Lookup rejected by service: {message}")]
    Rejected {
        /// Explanation supplied by the service, if any.
        message: String,
    },
}
