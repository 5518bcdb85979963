//! IP Monitor: public IP change watcher
//!
//! A library for polling a geolocation service, recording every check and
//! change to an append-only log, and raising a desktop notification when the
//! public IP address changes.

pub mod config;
pub mod journal;
pub mod lookup;
pub mod monitor;
pub mod notify;
pub mod report;
pub mod time;
