//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Squadcast API client
///
/// Looks up services through the Squadcast REST API and creates
/// incidents through the incident webhook.
#[derive(Debug, Parser)]
#[command(name = "squadcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Refresh token used to obtain API access tokens
    #[arg(long = "refresh-token", global = true)]
    pub refresh_token: Option<String>,

    /// Base URL for the REST API
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Base URL for the incident webhook
    #[arg(long = "webhook-url", global = true)]
    pub webhook_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for squadcast
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "squadcast.toml")]
        output: PathBuf,
    },

    /// List all services visible to the authenticated account
    Services,

    /// Show a single service, looked up by name or by id
    Service {
        /// Service name to look up
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        name: Option<String>,

        /// Service id to look up
        #[arg(long)]
        id: Option<String>,
    },

    /// Create an incident through the incident webhook
    Incident {
        /// Service whose webhook API key receives the incident
        #[arg(long, conflicts_with = "api_key", required_unless_present = "api_key")]
        service: Option<String>,

        /// Webhook API key to post with directly
        #[arg(long)]
        api_key: Option<String>,

        /// Incident message
        #[arg(long)]
        message: String,

        /// Incident description
        #[arg(long, default_value = "")]
        description: String,

        /// Incident status
        #[arg(long, value_enum, default_value = "trigger")]
        status: StatusArg,
    },
}

/// Incident status argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Open a new incident
    #[value(name = "trigger")]
    Trigger,
    /// Resolve a previously triggered incident
    #[value(name = "resolve")]
    Resolve,
}

impl From<StatusArg> for crate::webhook::IncidentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Trigger => Self::Trigger,
            StatusArg::Resolve => Self::Resolve,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, surfacing parse failures
    /// instead of exiting (useful for testing argument rules).
    ///
    /// # Errors
    ///
    /// Returns an error when the arguments violate the CLI contract.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
