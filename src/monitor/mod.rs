//! Monitor loop that detects public IP changes.
//!
//! Each tick fetches a snapshot, writes a check entry, and on a new IP writes
//! a change entry, prints a notice to the monitor's output (stdout unless
//! replaced) and raises a desktop notification. The
//! last IP acted on lives in the [`Monitor`] and is seeded from the change
//! log at construction.

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::future::Future;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Duration;

use crate::journal::{ChangeLog, LogEntry};
use crate::lookup::{GeoLookup, IpSnapshot};
use crate::notify::Notifier;
use crate::time::{Clock, SystemClock};

/// `strftime` layout of the timestamp on console change notices.
const CONSOLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// What a single tick observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No usable data; nothing was written and state is untouched.
    Unavailable,

    /// The fetched IP equals the last one acted on.
    Unchanged,

    /// The fetched IP differs from the last one acted on.
    Changed {
        /// IP held before this tick (`None` if it was unknown)
        previous: Option<String>,
        /// IP now held
        current: String,
    },
}

/// Polling monitor for the public IP address.
///
/// # Type Parameters
///
/// * `L` - The [`GeoLookup`] used on every tick
/// * `N` - The [`Notifier`] raised on change
/// * `C` - The [`Clock`] stamping log lines and console notices
/// * `W` - Where change notices are printed
pub struct Monitor<L, N, C = SystemClock, W = Stdout> {
    lookup: L,
    notifier: N,
    journal: ChangeLog<C>,
    interval: Duration,
    output: W,
    last_ip: Option<String>,
}

impl<L, N, C> Monitor<L, N, C>
where
    L: GeoLookup,
    N: Notifier,
    C: Clock,
{
    /// Creates a monitor printing to stdout, recovering the last known IP
    /// from `journal`.
    #[must_use]
    pub fn new(lookup: L, notifier: N, journal: ChangeLog<C>, interval: Duration) -> Self {
        Self::with_output(lookup, notifier, journal, interval, io::stdout())
    }
}

impl<L, N, C, W> Monitor<L, N, C, W>
where
    L: GeoLookup,
    N: Notifier,
    C: Clock,
    W: Write,
{
    /// Creates a monitor printing change notices to `output`.
    #[must_use]
    pub fn with_output(
        lookup: L,
        notifier: N,
        journal: ChangeLog<C>,
        interval: Duration,
        output: W,
    ) -> Self {
        let last_ip = journal.recover_last_ip();
        match &last_ip {
            Some(ip) => tracing::info!("Last known IP: {ip}"),
            None => tracing::info!("No previous IP change recorded, starting fresh"),
        }

        Self {
            lookup,
            notifier,
            journal,
            interval,
            output,
            last_ip,
        }
    }

    /// Returns the last IP acted on, if any.
    #[must_use]
    pub fn last_ip(&self) -> Option<&str> {
        self.last_ip.as_deref()
    }

    /// Returns the pause between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the path of the change log.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        self.journal.path()
    }

    /// Runs ticks separated by the configured interval until `shutdown`
    /// completes.
    ///
    /// Shutdown is observed both while a lookup is in flight and while
    /// sleeping. Nothing that happens inside a tick ends the loop.
    pub async fn run_until<S>(&mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => break,

                outcome = self.tick() => {
                    tracing::trace!("Tick finished: {outcome:?}");
                }
            }

            tokio::select! {
                biased;

                () = &mut shutdown => break,

                () = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::info!("Monitor stopped");
    }

    /// Performs one fetch/compare/record cycle.
    pub async fn tick(&mut self) -> TickOutcome {
        let fetched = self.lookup.lookup().await;
        let snapshot = match fetched.and_then(IpSnapshot::into_available) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!("IP data unavailable, skipping tick: {e}");
                return TickOutcome::Unavailable;
            }
        };

        self.record(&LogEntry::check(&snapshot));

        if self.last_ip.as_deref() == Some(snapshot.ip.as_str()) {
            return TickOutcome::Unchanged;
        }

        let change = LogEntry::change(&snapshot);
        self.record(&change);
        let stamp = self.journal.clock().local_now();
        self.announce(&format!(
            "[{}] CHANGE DETECTED: {change}",
            stamp.format(CONSOLE_TIMESTAMP_FORMAT)
        ));

        if let Err(e) = self.notifier.notify() {
            let failure = LogEntry::notify_failed(&e);
            tracing::error!("{failure}");
            self.record(&failure);
        }

        let previous = self.last_ip.replace(snapshot.ip.clone());
        TickOutcome::Changed {
            previous,
            current: snapshot.ip,
        }
    }

    /// Prints a console notice. A failed write is logged and the tick goes on.
    fn announce(&mut self, notice: &str) {
        let written = writeln!(self.output, "{notice}").and_then(|()| self.output.flush());
        if let Err(e) = written {
            tracing::error!("Failed to print change notice: {e}");
        }
    }

    /// Appends to the change log. A failed write is logged and the tick goes on.
    fn record(&self, entry: &LogEntry) {
        if let Err(e) = self.journal.append(entry) {
            tracing::error!("Failed to record '{entry}': {e}");
        }
    }
}
