//! Application execution logic.
//!
//! This module wires the lookup, change log and notifier together and runs
//! either the monitor loop or the single check.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::signal;

use ip_monitor::config::{RunMode, ValidatedConfig};
use ip_monitor::journal::ChangeLog;
use ip_monitor::lookup::{GeoLookup, HttpError, IpApiLookup, ReqwestClient};
use ip_monitor::monitor::Monitor;
use ip_monitor::notify::PlatformNotifier;
use ip_monitor::report::check_now;

/// Type alias for the application's lookup.
type AppLookup = IpApiLookup<ReqwestClient>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to construct the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] HttpError),

    /// Failed to write the single-check report.
    #[error("Failed to write report: {0}")]
    Output(#[source] io::Error),
}

/// Runtime options extracted from validated config.
///
/// Holds only what the monitor loop needs once the lookup is built.
struct RuntimeOptions {
    poll_interval: Duration,
    log_file: PathBuf,
}

impl From<&ValidatedConfig> for RuntimeOptions {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            poll_interval: config.poll_interval,
            log_file: config.log_file.clone(),
        }
    }
}

/// Executes the mode selected in `config`.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - The single-check report cannot be written to stdout
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires:
/// - Network access to the geolocation endpoint
/// - Real async runtime with signal handling
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let lookup = create_lookup(&config)?;

    match config.mode {
        RunMode::CheckNow => run_check(&lookup).await,
        RunMode::Monitor => {
            run_monitor(lookup, RuntimeOptions::from(&config)).await;
            Ok(())
        }
    }
}

/// Creates the geolocation lookup from configuration.
fn create_lookup(config: &ValidatedConfig) -> Result<AppLookup, RunError> {
    let client =
        ReqwestClient::with_timeout(config.request_timeout).map_err(RunError::HttpClient)?;
    Ok(IpApiLookup::new(client, config.endpoint.clone()))
}

/// Runs the single check and prints the report to stdout.
///
/// An unavailable lookup is reported on the console and still counts as a
/// normal completion.
async fn run_check<L: GeoLookup>(lookup: &L) -> Result<(), RunError> {
    let mut stdout = io::stdout().lock();

    match check_now(lookup, &mut stdout).await.map_err(RunError::Output)? {
        Ok(snapshot) => tracing::debug!("Checked {} ({})", snapshot.ip, snapshot.location()),
        Err(e) => tracing::debug!("Check failed: {e}"),
    }

    Ok(())
}

/// Runs the monitor loop until a shutdown signal is received.
///
/// Excluded from coverage - requires network access and signal handling.
#[cfg(not(tarpaulin_include))]
async fn run_monitor<L: GeoLookup>(lookup: L, options: RuntimeOptions) {
    let journal = ChangeLog::new(&options.log_file);

    if let Err(e) = write_banner(&mut io::stdout().lock(), &options) {
        tracing::error!("Failed to print startup banner: {e}");
    }

    let mut monitor = Monitor::new(
        lookup,
        PlatformNotifier::default(),
        journal,
        options.poll_interval,
    );

    monitor.run_until(shutdown_signal()).await;
    tracing::info!("Shutdown signal received, stopped");
}

/// Writes the two startup lines announcing the interval and the log location.
fn write_banner<W: Write>(out: &mut W, options: &RuntimeOptions) -> io::Result<()> {
    writeln!(
        out,
        "Monitoring started. Checking every {} seconds...",
        options.poll_interval.as_secs()
    )?;
    writeln!(out, "Logs: {}", absolute_log_path(&options.log_file).display())?;
    out.flush()
}

/// Resolves the log path against the working directory for display.
fn absolute_log_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
