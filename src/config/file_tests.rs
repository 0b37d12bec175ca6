//! Tests for TOML configuration parsing.

use super::file::{FileConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            refresh_token = "rt-secret"
        "#;

        let config = FileConfig::parse(toml).unwrap();
        assert_eq!(config.refresh_token.as_deref(), Some("rt-secret"));
        assert!(config.api_url.is_none());
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            refresh_token = "rt-secret"
            api_url = "https://api.example.com/v3"
            webhook_url = "https://hooks.example.com/v2/incidents/api"
        "#;

        let config = FileConfig::parse(toml).unwrap();
        assert_eq!(config.refresh_token.as_deref(), Some("rt-secret"));
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com/v3"));
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://hooks.example.com/v2/incidents/api")
        );
    }

    #[test]
    fn parse_empty_config() {
        let toml = "";
        let config = FileConfig::parse(toml).unwrap();

        assert!(config.refresh_token.is_none());
        assert!(config.api_url.is_none());
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            refresh_token = "rt-secret"
            unknown_field = "value"
        "#;

        let result = FileConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_sections() {
        let toml = r#"
            [unknown_section]
            key = "value"
        "#;

        let result = FileConfig::parse(toml);
        assert!(result.is_err());
    }
}

mod default_template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();
        // Template should be parseable (commented-out values don't matter)
        let result = FileConfig::parse(&template);
        assert!(
            result.is_ok(),
            "Template should be valid TOML: {:?}",
            result.err()
        );
    }

    #[test]
    fn template_documents_all_fields() {
        let template = default_config_template();

        assert!(
            template.contains("refresh_token"),
            "Template should document refresh_token"
        );
        assert!(
            template.contains("api_url"),
            "Template should document api_url"
        );
        assert!(
            template.contains("webhook_url"),
            "Template should document webhook_url"
        );
    }

    #[test]
    fn template_documents_environment_variable() {
        let template = default_config_template();

        assert!(
            template.contains("SQUADCAST_REFRESH_TOKEN"),
            "Template should mention the environment variable"
        );
    }

    #[test]
    fn template_shows_default_endpoints() {
        let template = default_config_template();

        assert!(template.contains(crate::api::DEFAULT_ENDPOINT));
        assert!(template.contains(crate::webhook::DEFAULT_ENDPOINT));
    }
}

mod file_loading {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"refresh_token = "rt-secret""#).unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.refresh_token.as_deref(), Some("rt-secret"));
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let path = Path::new("nonexistent_config_file_12345.toml");
        let result = FileConfig::load(path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = FileConfig::load(file.path());

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
