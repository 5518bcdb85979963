//! Default values for configuration options.

use std::time::Duration;

/// Default polling interval in seconds.
pub const POLL_INTERVAL_SECS: u64 = 15;

/// Default change log location, relative to the working directory.
pub const LOG_FILE: &str = "logs/changes.log";

/// Geolocation endpoint queried on every check.
pub const ENDPOINT: &str = "http://ip-api.com/json/";

/// Request timeout for the geolocation endpoint, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default polling interval as Duration.
#[must_use]
pub const fn poll_interval() -> Duration {
    Duration::from_secs(POLL_INTERVAL_SECS)
}

/// Default request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
