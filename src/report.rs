//! One-shot IP check printed to the console.

use std::io::{self, Write};

use crate::lookup::{GeoLookup, IpSnapshot, LookupError};

const RULE: &str = "========================================";

/// Progress line shown while the lookup is in flight; overwritten by `\r`.
pub const PROGRESS: &str = "Checking current IP...";

/// Printed when the lookup yields no usable data.
pub const UNAVAILABLE: &str = "Error: Could not fetch IP data. Check your connection.";

/// Formats the report block for a snapshot.
#[must_use]
pub fn render(snapshot: &IpSnapshot) -> String {
    format!(
        "\n{RULE}\n CURRENT IP : {}\n LOCATION   : {}\n ISP        : {}\n{RULE}\n",
        snapshot.ip,
        snapshot.location(),
        snapshot.isp
    )
}

/// Looks up the IP once and writes the report (or an error line) to `out`.
///
/// The change log and notifier are never touched. Returns the lookup result
/// so callers can log the failure reason.
///
/// # Errors
///
/// Returns an I/O error only if writing to `out` fails.
pub async fn check_now<L, W>(lookup: &L, out: &mut W) -> io::Result<Result<IpSnapshot, LookupError>>
where
    L: GeoLookup,
    W: Write,
{
    write!(out, "{PROGRESS}\r")?;
    out.flush()?;

    let result = lookup.lookup().await.and_then(IpSnapshot::into_available);
    match &result {
        Ok(snapshot) => writeln!(out, "{}", render(snapshot))?,
        Err(_) => writeln!(out, "\n{UNAVAILABLE}")?,
    }
    out.flush()?;

    Ok(result)
}
