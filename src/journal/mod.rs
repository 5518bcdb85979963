//! Append-only change log.
//!
//! The log is a human-readable audit trail and, at the same time, the only
//! persisted state: the last IP the monitor acted on is recovered from the
//! most recent change line.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::ChangeLog;

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lookup::IpSnapshot;

/// Marker that starts every change message.
///
/// Both [`LogEntry`]'s `Display` and [`ChangeLog::recover_last_ip`] use it,
/// so writer and parser cannot drift apart.
pub const CHANGE_MARKER: &str = "IP Changed to: ";

/// Prefix of every check message.
pub const CHECK_MARKER: &str = "Check performed. Current IP: ";

/// Prefix of the line written when the change notification fails.
pub const NOTIFY_FAILED_MARKER: &str = "Failed to send notification: ";

/// `strftime` layout of the timestamp that starts every line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between timestamp and message.
pub const SEPARATOR: &str = " - ";

/// A single log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// Routine poll outcome, written on every successful tick.
    Check {
        /// IP seen on this tick
        ip: String,
        /// City reported for the IP
        city: String,
        /// Country reported for the IP
        country: String,
    },

    /// The IP differs from the last one acted on.
    Change {
        /// Newly observed IP
        ip: String,
        /// City reported for the IP
        city: String,
        /// Country reported for the IP
        country: String,
    },

    /// The change notification could not be shown.
    NotifyFailed {
        /// Error reported by the notifier
        reason: String,
    },
}

impl LogEntry {
    /// Builds a check entry from a snapshot.
    #[must_use]
    pub fn check(snapshot: &IpSnapshot) -> Self {
        Self::Check {
            ip: snapshot.ip.clone(),
            city: snapshot.city.clone(),
            country: snapshot.country.clone(),
        }
    }

    /// Builds a change entry from a snapshot.
    #[must_use]
    pub fn change(snapshot: &IpSnapshot) -> Self {
        Self::Change {
            ip: snapshot.ip.clone(),
            city: snapshot.city.clone(),
            country: snapshot.country.clone(),
        }
    }

    /// Builds the entry recorded when notification dispatch fails.
    #[must_use]
    pub fn notify_failed(error: &impl fmt::Display) -> Self {
        Self::NotifyFailed {
            reason: error.to_string(),
        }
    }

    /// Returns `true` for change entries.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        matches!(self, Self::Change { .. })
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check { ip, city, country } => {
                write!(f, "{CHECK_MARKER}{ip} | Location: {city}, {country}")
            }
            Self::Change { ip, city, country } => {
                write!(f, "{CHANGE_MARKER}{ip} | Location: {city}, {country}")
            }
            Self::NotifyFailed { reason } => write!(f, "{NOTIFY_FAILED_MARKER}{reason}"),
        }
    }
}

/// Errors that can occur while appending to the log.
///
/// Read-side problems never surface as errors; recovery degrades to
/// "unknown last IP".
#[derive(Debug, Error)]
pub enum JournalError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to open or write the log file.
    #[error("Failed to write log file '{}': {source}", path.display())]
    Write {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Extracts the IP from a change line, if the line is one.
///
/// The token is whatever follows [`CHANGE_MARKER`] up to the next space.
#[must_use]
pub fn parse_change_ip(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(CHANGE_MARKER)?;
    let token = rest.split(' ').next()?.trim();
    (!token.is_empty()).then_some(token)
}
