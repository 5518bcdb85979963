//! Desktop notifications raised when the public IP changes.
//!
//! This module provides:
//! - The [`Notifier`] trait and its error type ([`NotifyError`])
//! - An `osascript` based notifier ([`OsaScriptNotifier`]) used on macOS
//! - A `notify-rust` based notifier ([`DesktopNotifier`]) used elsewhere
//! - The implementation chosen for the build target ([`PlatformNotifier`])

#[cfg(not(target_os = "macos"))]
mod desktop;
mod osascript;

#[cfg(not(target_os = "macos"))]
pub use desktop::DesktopNotifier;
pub use osascript::OsaScriptNotifier;

/// Notifier selected for the build target.
#[cfg(target_os = "macos")]
pub type PlatformNotifier = OsaScriptNotifier;

/// Notifier selected for the build target.
#[cfg(not(target_os = "macos"))]
pub type PlatformNotifier = DesktopNotifier;

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Notification title.
pub const TITLE: &str = "IP Monitor";

/// Notification body.
pub const MESSAGE: &str = "IP Changed";

/// Application name reported to the notification daemon.
pub const APP_NAME: &str = "IP Monitor";

/// How long the notification stays on screen, where the platform honors it.
pub const DISPLAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for notification dispatch.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The helper program could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The helper program ran but reported failure.
    #[error("'{program}' exited with {status}")]
    ExitStatus {
        /// Program that was invoked
        program: String,
        /// Its exit status
        status: ExitStatus,
    },

    /// The desktop notification service rejected the notification.
    #[error("Desktop notification failed: {message}")]
    Desktop {
        /// Error reported by the notification backend
        message: String,
    },
}

/// Raises the "IP changed" desktop notification.
///
/// Dispatch is best-effort: callers log an `Err` and carry on.
pub trait Notifier: Send + Sync {
    /// Shows the notification once.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the platform mechanism fails.
    fn notify(&self) -> Result<(), NotifyError>;
}
