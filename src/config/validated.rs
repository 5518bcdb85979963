//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Which entry path the binary takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Poll forever, recording and notifying changes.
    Monitor,
    /// Check once, print the result and exit.
    CheckNow,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monitor => write!(f, "monitor"),
            Self::CheckNow => write!(f, "check-now"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Entry path selected by `--now`
    pub mode: RunMode,

    /// Pause between monitor ticks
    pub poll_interval: Duration,

    /// Change log location
    pub log_file: PathBuf,

    /// Geolocation endpoint
    pub endpoint: Url,

    /// Timeout for each geolocation request
    pub request_timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ mode: {}, poll_interval: {}s, log_file: {}, endpoint: {}, timeout: {}s }}",
            self.mode,
            self.poll_interval.as_secs(),
            self.log_file.display(),
            self.endpoint,
            self.request_timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The poll interval is zero
    /// - The log path is empty or names a directory root
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let mode = if cli.now {
            RunMode::CheckNow
        } else {
            RunMode::Monitor
        };

        let poll_interval = Self::resolve_poll_interval(cli, toml)?;
        let log_file = Self::resolve_log_file(cli, toml)?;
        let endpoint = parse_endpoint(defaults::ENDPOINT)?;

        Ok(Self {
            mode,
            poll_interval,
            log_file,
            endpoint,
            request_timeout: defaults::request_timeout(),
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_poll_interval(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .poll_interval
            .or_else(|| toml.and_then(|t| t.monitor.poll_interval))
            .unwrap_or(defaults::POLL_INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::POLL_INTERVAL,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_log_file(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let path = cli
            .log_file
            .clone()
            .or_else(|| toml.and_then(|t| t.log.file.clone()))
            .unwrap_or_else(|| PathBuf::from(defaults::LOG_FILE));

        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidPath {
                field: field::LOG_FILE,
                reason: "must not be empty".to_string(),
            });
        }

        if path.file_name().is_none() {
            return Err(ConfigError::InvalidPath {
                field: field::LOG_FILE,
                reason: format!("'{}' does not name a file", path.display()),
            });
        }

        Ok(path)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_endpoint(s: &str) -> Result<Url, ConfigError> {
    Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })
}
