//! File-backed change log implementation.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::time::{Clock, SystemClock};

use super::{JournalError, LogEntry, SEPARATOR, TIMESTAMP_FORMAT, parse_change_ip};

/// Append-only text log at a fixed path.
///
/// Every line has the shape `<timestamp> - <message>`. Nothing is ever
/// rewritten or truncated; the file grows for as long as the monitor runs.
#[derive(Debug, Clone)]
pub struct ChangeLog<C = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl ChangeLog<SystemClock> {
    /// Creates a log at the given path, stamped with the system clock.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }
}

impl<C: Clock> ChangeLog<C> {
    /// Creates a log with a custom clock for timestamps.
    #[must_use]
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Returns the path to the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the clock stamping this log.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Formats `entry` as a complete line, without the trailing newline.
    #[must_use]
    pub fn render(&self, entry: &LogEntry) -> String {
        let stamp: DateTime<Local> = self.clock.now().into();
        format!("{}{SEPARATOR}{entry}", stamp.format(TIMESTAMP_FORMAT))
    }

    /// Appends one timestamped line and flushes it.
    ///
    /// The parent directory is created on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be opened or written.
    pub fn append(&self, entry: &LogEntry) -> Result<(), JournalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| JournalError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let line = self.render(entry);
        let write_err = |source| JournalError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{line}").map_err(write_err)?;
        file.flush().map_err(write_err)
    }

    /// Recovers the IP of the most recent change line.
    ///
    /// Returns `None` when the file is missing, holds no change line, or
    /// cannot be read. Read failures are logged and otherwise ignored so the
    /// monitor can still start.
    #[must_use]
    pub fn recover_last_ip(&self) -> Option<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    "Could not read change log {} ({e}), last IP unknown",
                    self.path.display()
                );
                return None;
            }
        };

        content
            .lines()
            .rev()
            .find_map(parse_change_ip)
            .map(str::to_string)
    }
}
