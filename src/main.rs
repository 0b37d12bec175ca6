//! Squadcast API client.
//!
//! Entry point for the squadcast application.

use squadcast::config::{Cli, Command, Settings, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let mut cli = Cli::parse_args();

    // Init runs before settings resolution so a broken config file
    // never blocks generating a fresh template.
    let command = match cli.command.take() {
        Some(Command::Init { output }) => return handle_init(&output),
        Some(command) => command,
        None => {
            eprintln!("No command given. Run 'squadcast --help' for usage.");
            return exit_code::CONFIG_ERROR;
        }
    };

    // Load and resolve settings
    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(settings.verbose);
    tracing::debug!("{settings}");

    run_application(&settings, command)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs the requested command with the given settings.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(settings: &Settings, command: Command) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(settings, command)) {
        Ok(()) => exit_code::SUCCESS,
        Err(run::RunError::Config(e)) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
