//! Geolocation snapshot as returned by the lookup service.

use serde::Deserialize;

use super::LookupError;

/// Placeholder used when the service omits a location field.
pub const UNKNOWN: &str = "Unknown";

/// Outcome the service reports in its own `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStatus {
    /// The service resolved the caller's address.
    Success,
    /// The service refused or could not resolve the request.
    Fail,
}

/// The result of one IP/location fetch.
///
/// Created per poll and discarded afterwards; only `ip` outlives it, through
/// the change log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpSnapshot {
    /// Public IP address of the caller.
    #[serde(rename = "query", default)]
    pub ip: String,

    /// City of the address, or [`UNKNOWN`].
    #[serde(default = "unknown")]
    pub city: String,

    /// Country of the address, or [`UNKNOWN`].
    #[serde(default = "unknown")]
    pub country: String,

    /// Internet service provider, or [`UNKNOWN`].
    #[serde(default = "unknown")]
    pub isp: String,

    /// Service-side status flag.
    pub status: LookupStatus,

    /// Failure explanation on `fail` responses.
    #[serde(default)]
    pub message: Option<String>,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

impl IpSnapshot {
    /// Creates a successful snapshot.
    #[must_use]
    pub fn new(
        ip: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        isp: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            city: city.into(),
            country: country.into(),
            isp: isp.into(),
            status: LookupStatus::Success,
            message: None,
        }
    }

    /// Returns `true` if the service reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == LookupStatus::Success
    }

    /// Returns the snapshot only if it carries usable data.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Rejected`] if the service reported `fail`, or
    /// reported success without an IP address.
    pub fn into_available(self) -> Result<Self, LookupError> {
        if !self.is_success() {
            return Err(LookupError::Rejected {
                message: self.message.unwrap_or_else(|| "no reason given".to_string()),
            });
        }
        if self.ip.is_empty() {
            return Err(LookupError::Rejected {
                message: "response did not include an IP address".to_string(),
            });
        }
        Ok(self)
    }

    /// Formats the location as `city, country`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}
