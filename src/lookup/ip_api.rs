//! Lookup trait and the ip-api.com implementation.

use http::header::{ACCEPT, HeaderValue};
use url::Url;

use super::{HttpClient, HttpRequest, IpSnapshot, LookupError};

/// Trait for fetching the caller's public IP and location.
///
/// # Design
///
/// - The monitor and the single-check runner depend on this trait only
/// - A `fail` answer from the service is returned as `Ok` with
///   [`super::LookupStatus::Fail`]; callers decide via
///   [`IpSnapshot::into_available`]
/// - Enables dependency injection for testing with scripted results
pub trait GeoLookup: Send + Sync {
    /// Queries the service once.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the request fails, the service answers
    /// with a non-2xx status, or the body cannot be decoded.
    fn lookup(&self) -> impl std::future::Future<Output = Result<IpSnapshot, LookupError>> + Send;
}

/// Lookup against an ip-api.com style JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiLookup<H> {
    client: H,
    endpoint: Url,
}

impl<H: HttpClient> IpApiLookup<H> {
    /// Creates a lookup that queries `endpoint` through `client`.
    #[must_use]
    pub const fn new(client: H, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Returns the endpoint being queried.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl<H: HttpClient> GeoLookup for IpApiLookup<H> {
    async fn lookup(&self) -> Result<IpSnapshot, LookupError> {
        let request = HttpRequest::get(self.endpoint.clone())
            .with_header(ACCEPT, HeaderValue::from_static("application/json"));

        let response = self.client.request(request).await?;
        if !response.is_success() {
            return Err(LookupError::Status(response.status));
        }

        let snapshot: IpSnapshot = serde_json::from_slice(&response.body)?;
        tracing::debug!(
            "Lookup answered {:?} for {} ({})",
            snapshot.status,
            snapshot.ip,
            snapshot.location()
        );
        Ok(snapshot)
    }
}
