//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Refresh token used to obtain API access tokens
    pub refresh_token: Option<String>,

    /// Base URL for the REST API
    pub api_url: Option<String>,

    /// Base URL for the incident webhook
    pub webhook_url: Option<String>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Squadcast Configuration File

# Refresh token used to obtain API access tokens.
# Required for commands that talk to the REST API (services, service,
# incident --service). Can also be provided with --refresh-token or the
# SQUADCAST_REFRESH_TOKEN environment variable.
# refresh_token = "your-refresh-token"

# Base URL for the REST API (default: https://api.squadcast.com/v3)
# api_url = "https://api.squadcast.com/v3"

# Base URL for the incident webhook (default: https://api.squadcast.com/v2/incidents/api)
# webhook_url = "https://api.squadcast.com/v2/incidents/api"
"#
    .to_string()
}
