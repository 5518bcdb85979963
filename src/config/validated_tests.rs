//! Tests for validated configuration.

use std::path::PathBuf;
use std::time::Duration;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{RunMode, ValidatedConfig, write_default_config};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["ip-monitor"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod defaults {
    use super::*;

    #[test]
    fn no_args_uses_built_in_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.mode, RunMode::Monitor);
        assert_eq!(config.poll_interval, Duration::from_secs(15));
        assert_eq!(config.log_file, PathBuf::from("logs/changes.log"));
        assert_eq!(config.endpoint.as_str(), "http://ip-api.com/json/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(!config.verbose);
    }

    #[test]
    fn now_flag_selects_check_mode() {
        let config = ValidatedConfig::from_raw(&cli(&["--now"]), None).unwrap();
        assert_eq!(config.mode, RunMode::CheckNow);
    }

    #[test]
    fn verbose_flag_is_carried() {
        let config = ValidatedConfig::from_raw(&cli(&["-v"]), None).unwrap();
        assert!(config.verbose);
    }
}

mod precedence {
    use super::*;

    #[test]
    fn toml_overrides_defaults() {
        let toml = toml(
            r#"
            [monitor]
            poll_interval = 300

            [log]
            file = "state/ip.log"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(300));
        assert_eq!(config.log_file, PathBuf::from("state/ip.log"));
    }

    #[test]
    fn cli_overrides_toml() {
        let toml = toml(
            r#"
            [monitor]
            poll_interval = 300

            [log]
            file = "state/ip.log"
        "#,
        );
        let cli = cli(&["--poll-interval", "5", "--log-file", "other.log"]);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.log_file, PathBuf::from("other.log"));
    }

    #[test]
    fn sources_merge_per_field() {
        let toml = toml(
            r#"
            [log]
            file = "from-toml.log"
        "#,
        );
        let cli = cli(&["--poll-interval", "20"]);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(20));
        assert_eq!(config.log_file, PathBuf::from("from-toml.log"));
    }
}

mod validation {
    use super::*;

    #[test]
    fn zero_interval_from_cli_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--poll-interval", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "poll_interval",
                ..
            })
        ));
    }

    #[test]
    fn zero_interval_from_toml_is_rejected() {
        let toml = toml("[monitor]\npoll_interval = 0\n");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        assert!(matches!(result, Err(ConfigError::InvalidDuration { .. })));
    }

    #[test]
    fn empty_log_path_is_rejected() {
        let toml = toml("[log]\nfile = \"\"\n");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidPath {
                field: "log_file",
                ..
            })
        ));
    }

    #[test]
    fn log_path_without_file_name_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--log-file", "logs/.."]), None);
        assert!(matches!(result, Err(ConfigError::InvalidPath { .. })));
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn load_without_config_file_uses_cli_only() {
        let config = ValidatedConfig::load(&cli(&["--poll-interval", "7"])).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(7));
    }

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[monitor]\npoll_interval = 90").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ValidatedConfig::load(&cli(&["--config", &path])).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(90));
    }

    #[test]
    fn load_missing_config_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let path = path.to_str().unwrap();

        let result = ValidatedConfig::load(&cli(&["-c", path]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn written_template_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ip-monitor.toml");

        write_default_config(&path).unwrap();
        let config =
            ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(15));
        assert_eq!(config.log_file, PathBuf::from("logs/changes.log"));
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.toml");

        assert!(matches!(
            write_default_config(&path),
            Err(ConfigError::FileWrite { .. })
        ));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_summarizes_config() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(
            config.to_string(),
            "Config { mode: monitor, poll_interval: 15s, log_file: logs/changes.log, \
             endpoint: http://ip-api.com/json/, timeout: 10s }"
        );
    }

    #[test]
    fn run_mode_display() {
        assert_eq!(RunMode::Monitor.to_string(), "monitor");
        assert_eq!(RunMode::CheckNow.to_string(), "check-now");
    }
}
