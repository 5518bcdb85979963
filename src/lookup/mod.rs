//! Lookup layer for fetching the public IP and its location.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`]) and reading responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`]) with a reqwest implementation ([`ReqwestClient`])
//! - The lookup result ([`IpSnapshot`], [`LookupStatus`])
//! - Querying the geolocation service ([`GeoLookup`], [`IpApiLookup`])

mod client;
mod error;
mod ip_api;
mod snapshot;
mod transport;


pub use client::ReqwestClient;
pub use error::{HttpError, LookupError};
pub use ip_api::{GeoLookup, IpApiLookup};
pub use snapshot::{IpSnapshot, LookupStatus, UNKNOWN};
pub use transport::{HttpClient, HttpRequest, HttpResponse};
