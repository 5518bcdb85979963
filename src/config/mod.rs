//! Configuration layer for IP Monitor.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`RunMode`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! The poll interval and the log path are resolved with the following
//! priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (`--poll-interval`, `--log-file`)
//! 2. **TOML config file** (`monitor.poll_interval`, `log.file`)
//! 3. **Built-in defaults** (15 seconds, `logs/changes.log`)
//!
//! # Fixed Parameters
//!
//! The geolocation endpoint and its 10 second request timeout are not
//! user-configurable; they are carried in [`ValidatedConfig`] from
//! [`defaults`] so the rest of the application receives them explicitly.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{LogSection, MonitorSection, TomlConfig, default_config_template};
pub use validated::{RunMode, ValidatedConfig, write_default_config};
