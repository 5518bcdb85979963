//! Notifier that shells out to AppleScript.

use std::process::{Command, Stdio};

use super::{MESSAGE, NotifyError, Notifier, TITLE};

/// Runs `osascript -e 'display notification ...'`.
#[derive(Debug, Clone)]
pub struct OsaScriptNotifier {
    program: String,
    script: String,
}

impl OsaScriptNotifier {
    /// Default interpreter.
    pub const PROGRAM: &'static str = "osascript";

    /// Creates a notifier using the system `osascript`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(Self::PROGRAM)
    }

    /// Creates a notifier that invokes `program` instead of `osascript`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            script: format!("display notification \"{MESSAGE}\" with title \"{TITLE}\""),
        }
    }

    /// Returns the AppleScript passed via `-e`.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }
}

impl Default for OsaScriptNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for OsaScriptNotifier {
    fn notify(&self) -> Result<(), NotifyError> {
        let status = Command::new(&self.program)
            .arg("-e")
            .arg(&self.script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|source| NotifyError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::ExitStatus {
                program: self.program.clone(),
                status,
            })
        }
    }
}
