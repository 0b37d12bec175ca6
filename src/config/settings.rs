//! Resolved settings after merging CLI, environment, and TOML sources.
//!
//! This module contains the final configuration that is used by the
//! application. All resolution is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::file::FileConfig;

/// Environment variable consulted for the refresh token.
pub const REFRESH_TOKEN_ENV: &str = "SQUADCAST_REFRESH_TOKEN";

/// Fully resolved settings ready for use by the application.
///
/// # Construction
///
/// Use [`Settings::load`] to resolve from CLI args, the environment, and
/// an optional TOML config file, or [`Settings::from_raw`] when the
/// sources are already in hand.
#[derive(Debug)]
pub struct Settings {
    /// Refresh token used to obtain API access tokens.
    /// `None` until a command that talks to the REST API requires one.
    pub refresh_token: Option<String>,

    /// Base URL for the REST API
    pub api_url: Url,

    /// Base URL for the incident webhook
    pub webhook_url: Url,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The refresh token is a credential and never printed.
        let token = if self.refresh_token.is_some() {
            "set"
        } else {
            "unset"
        };

        write!(
            f,
            "Settings {{ api_url: {}, webhook_url: {}, refresh_token: {token}, verbose: {} }}",
            self.api_url, self.webhook_url, self.verbose,
        )
    }
}

impl Settings {
    /// Resolves settings from CLI arguments, an environment token, and an
    /// optional TOML config.
    ///
    /// The refresh token is resolved with CLI > environment > config file
    /// precedence. The endpoint URLs are resolved with CLI > config file >
    /// built-in default precedence; the environment is not consulted for
    /// them.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided endpoint URL does not parse.
    pub fn from_raw(
        cli: &Cli,
        env_token: Option<&str>,
        file: Option<&FileConfig>,
    ) -> Result<Self, ConfigError> {
        let refresh_token = resolve_refresh_token(cli.refresh_token.as_deref(), env_token, file);

        let api_url = resolve_url(
            cli.api_url.as_deref(),
            file.and_then(|f| f.api_url.as_deref()),
            crate::api::DEFAULT_ENDPOINT,
        )?;

        let webhook_url = resolve_url(
            cli.webhook_url.as_deref(),
            file.and_then(|f| f.webhook_url.as_deref()),
            crate::webhook::DEFAULT_ENDPOINT,
        )?;

        Ok(Self {
            refresh_token,
            api_url,
            webhook_url,
            verbose: cli.verbose,
        })
    }

    /// Loads and resolves settings from CLI, environment, and config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path and
    /// fails when it is missing. Otherwise the default path under the
    /// user config directory is loaded only when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - A provided endpoint URL does not parse
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = load_file(cli)?;
        let env_token = std::env::var(REFRESH_TOKEN_ENV).ok();

        Self::from_raw(cli, env_token.as_deref(), file.as_ref())
    }

    /// Returns the refresh token required by REST API commands.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequired` when no token was provided by CLI,
    /// environment, or config file.
    pub fn require_refresh_token(&self) -> Result<&str, ConfigError> {
        self.refresh_token.as_deref().ok_or_else(|| {
            ConfigError::missing(
                field::REFRESH_TOKEN,
                "Use --refresh-token, set SQUADCAST_REFRESH_TOKEN, or set refresh_token in config file",
            )
        })
    }
}

/// Returns the default configuration file path under the user config
/// directory, or `None` when the platform has no config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("squadcast").join("config.toml"))
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::file::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn load_file(cli: &Cli) -> Result<Option<FileConfig>, ConfigError> {
    if let Some(ref path) = cli.config {
        return FileConfig::load(path).map(Some);
    }

    match default_config_path() {
        Some(path) if path.exists() => FileConfig::load(&path).map(Some),
        _ => Ok(None),
    }
}

fn resolve_refresh_token(
    cli: Option<&str>,
    env: Option<&str>,
    file: Option<&FileConfig>,
) -> Option<String> {
    cli.or(env)
        .or_else(|| file.and_then(|f| f.refresh_token.as_deref()))
        .map(str::to_owned)
}

fn resolve_url(cli: Option<&str>, file: Option<&str>, default: &str) -> Result<Url, ConfigError> {
    let url_str = cli.or(file).unwrap_or(default);

    Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
        url: url_str.to_string(),
        reason: e.to_string(),
    })
}
