//! Configuration layer for the Squadcast client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`FileConfig`])
//! - Resolved settings ([`Settings`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment** - `SQUADCAST_REFRESH_TOKEN` (refresh token only)
//! 3. **TOML config file** - Values from the configuration file
//! 4. **Built-in defaults** - The hosted Squadcast endpoints
//!
//! The endpoint URLs (`api_url`, `webhook_url`) always resolve because the
//! hosted endpoints serve as defaults. The refresh token has no default:
//! commands that talk to the REST API fail with a `MissingRequired` error
//! when it is absent, while webhook-only invocations (an explicit
//! `--api-key`) never need it.
//!
//! # Config File Discovery
//!
//! An explicit `--config` path must exist and parse; loading fails
//! otherwise. Without `--config`, the default path under the user config
//! directory (`<config_dir>/squadcast/config.toml`) is loaded only when
//! the file exists.

mod cli;
mod error;
mod file;
mod settings;

#[cfg(test)]
mod file_tests;

pub use cli::{Cli, Command, StatusArg};
pub use error::{ConfigError, field};
pub use file::{FileConfig, default_config_template};
pub use settings::{REFRESH_TOKEN_ENV, Settings, default_config_path, write_default_config};
