//! Command-line interface for ui-cli.
//!
//! # Available Commands
//!
//! - `init` - Create a `components.json` in an existing project
//! - `add` - Verify the project and add components to it
//!
//! # Basic Workflow
//!
//! ```bash
//! # 1. Initialize the project configuration
//! ui init --cwd ./my-app
//!
//! # 2. Add components (runs the preflight checks first)
//! ui add button card --cwd ./my-app
//!
//! # Show the preflight spinner and debug logs
//! ui --verbose add button --cwd ./my-app
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Debug logging and the preflight spinner
//! - `--quiet` - Suppress logging
//! - `--no-progress` - Disable spinners (also set via `UI_NO_PROGRESS`)

mod add;
mod init;

pub use add::{AddCommand, AddOptions};
pub use init::InitCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Runtime configuration for CLI execution.
///
/// Holds the settings derived from the global flags so tests and programmatic
/// callers can control them explicitly.
///
/// ```rust,ignore
/// let config = CliConfig {
///     log_level: Some("debug".to_string()),
///     no_progress: true,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter directive (`RUST_LOG`/`UI_LOG` take precedence).
    ///
    /// `None` disables logging entirely (quiet mode).
    pub log_level: Option<String>,

    /// Whether to disable spinners and other animated output.
    pub no_progress: bool,
}

/// Main CLI structure for ui-cli.
#[derive(Parser)]
#[command(
    name = "ui",
    about = "Add UI components to your project",
    version,
    long_about = "ui-cli checks that a project is initialised with components.json and adds components to it."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output: debug logs and the preflight spinner
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable spinners for automation
    ///
    /// Spinners are also hidden automatically when stderr is not a terminal.
    #[arg(long, global = true)]
    no_progress: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create a components.json file in an existing project.
    ///
    /// See [`InitCommand`] for options.
    Init(InitCommand),

    /// Add components to a project initialised with components.json.
    ///
    /// Runs the preflight checks before anything is written. See
    /// [`AddCommand`] for options.
    Add(AddCommand),
}

impl Cli {
    /// Execute the CLI with a configuration built from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    ///
    /// - `--verbose` → `debug`
    /// - `--quiet` → no logging
    /// - otherwise → `warn`
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress,
        }
    }

    /// Execute the CLI with a specific configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Init(cmd) => cmd.execute().await,
            Commands::Add(cmd) => cmd.execute(self.verbose, config.no_progress).await,
        }
    }
}
