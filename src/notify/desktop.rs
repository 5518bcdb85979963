//! Notifier backed by the platform notification service via `notify-rust`.

use notify_rust::{Notification, Timeout};

use super::{APP_NAME, DISPLAY_TIMEOUT, MESSAGE, NotifyError, Notifier, TITLE};

/// Shows a notification through D-Bus (Linux/BSD) or the Windows toast API.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Creates the notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn timeout() -> Timeout {
        let millis = u32::try_from(DISPLAY_TIMEOUT.as_millis()).unwrap_or(u32::MAX);
        Timeout::Milliseconds(millis)
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self) -> Result<(), NotifyError> {
        Notification::new()
            .summary(TITLE)
            .body(MESSAGE)
            .appname(APP_NAME)
            .timeout(Self::timeout())
            .show()
            .map(drop)
            .map_err(|e| NotifyError::Desktop {
                message: e.to_string(),
            })
    }
}
