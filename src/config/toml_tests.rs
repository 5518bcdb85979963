//! Tests for TOML configuration parsing.

use std::path::PathBuf;

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.monitor.poll_interval.is_none());
        assert!(config.log.file.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [monitor]
            poll_interval = 30

            [log]
            file = "/tmp/ip/changes.log"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.monitor.poll_interval, Some(30));
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/ip/changes.log")));
    }

    #[test]
    fn parse_partial_config() {
        let toml = r"
            [monitor]
            poll_interval = 60
        ";

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.monitor.poll_interval, Some(60));
        assert!(config.log.file.is_none());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let toml = r#"
            [notify]
            title = "Custom"
        "#;

        assert!(matches!(
            TomlConfig::parse(toml),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r"
            [monitor]
            poll_interval = 15
            poll_only = true
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let toml = r#"
            [monitor]
            poll_interval = "fifteen"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn negative_interval_is_rejected() {
        let toml = r"
            [monitor]
            poll_interval = -5
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[monitor]\npoll_interval = 45").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.monitor.poll_interval, Some(45));
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        match TomlConfig::load(&path) {
            Err(ConfigError::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected FileRead, got {other:?}"),
        }
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses_to_defaults() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.monitor.poll_interval, Some(15));
        assert_eq!(config.log.file, Some(PathBuf::from("logs/changes.log")));
    }

    #[test]
    fn default_template_has_comments() {
        let template = default_config_template();

        assert!(template.contains("# IP Monitor Configuration File"));
        assert!(template.contains("[monitor]"));
        assert!(template.contains("[log]"));
    }
}
