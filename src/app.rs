//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use squadcast::config::{ConfigError, REFRESH_TOKEN_ENV, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing credentials, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - transport failure, API or webhook rejection.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::REFRESH_TOKEN => {
            eprintln!(
                "\nThe refresh token comes from the Squadcast web console (Profile > Refresh Token)."
            );
            eprintln!(
                "Provide it with --refresh-token, the {REFRESH_TOKEN_ENV} environment variable,"
            );
            eprintln!("or a config file ('squadcast init' writes a template).");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'squadcast init' to generate a configuration template.");
        }
        ConfigError::InvalidUrl { .. } => {
            eprintln!("\nEndpoint overrides (--api-url, --webhook-url) must be absolute URLs.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// `--verbose` lowers the default level to DEBUG; an explicit `RUST_LOG`
/// directive still wins when set.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
