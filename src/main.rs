//! ui CLI entry point
//!
//! Parses arguments, sets up logging and runs the selected command. Any error
//! is rendered with suggestions and the process exits with status 1. A failed
//! preflight has already printed its own report, so it only sets the exit code.

use anyhow::Result;
use clap::Parser;
use ui_cli::cli;
use ui_cli::core::{UiError, user_friendly_error};
use ui_cli::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    init_logging(config.log_level.as_deref());

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if !matches!(e.downcast_ref::<UiError>(), Some(UiError::PreflightFailed { .. })) {
                user_friendly_error(e).display();
            }
            std::process::exit(1);
        }
    }
}
