//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait so tests can pin the timestamps
//! written to the change log and printed on change.

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Abstraction over system time for testability.
///
/// # Example
///
/// ```
/// use ip_monitor::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;

    /// Returns the current time in the local timezone.
    fn local_now(&self) -> DateTime<Local> {
        self.now().into()
    }
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
