//! Add components to a project.
//!
//! `add` never touches a project that fails the preflight checks: the target
//! must be an existing directory with a `package.json` and a loadable
//! `components.json`. When the checks fail, every problem found is printed
//! and the process exits with status 1.
//!
//! # Examples
//!
//! ```bash
//! ui add button card
//! ui add --all --cwd ./apps/web
//! ui --verbose add dialog      # show the preflight spinner
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ComponentsJsonLoader, Config};
use crate::core::UiError;
use crate::preflight::{
    NoopReporter, PreflightOutcome, PreflightReporter, SpinnerReporter, print_report,
    run_preflight_add,
};
use crate::utils::resolve_absolute;

/// Command to add components to the project.
#[derive(Args)]
pub struct AddCommand {
    /// The components to add
    #[arg(value_name = "COMPONENTS", required_unless_present = "all")]
    components: Vec<String>,

    /// Add all available components
    #[arg(short, long, conflicts_with = "components")]
    all: bool,

    /// The working directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    cwd: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    overwrite: bool,

    /// The path to add the components to
    #[arg(short, long)]
    path: Option<String>,

    /// Mute output
    #[arg(short, long)]
    silent: bool,
}

/// Validated options for one `add` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOptions {
    pub components: Vec<String>,
    pub all: bool,
    /// Absolute project root.
    pub cwd: PathBuf,
    pub yes: bool,
    pub overwrite: bool,
    pub path: Option<String>,
    pub silent: bool,
    /// Show the preflight spinner.
    pub verbose: bool,
    /// Keep the spinner hidden even in verbose mode.
    pub no_progress: bool,
}

impl AddOptions {
    /// The reporter matching the requested verbosity.
    #[must_use]
    pub fn reporter(&self) -> Box<dyn PreflightReporter> {
        if self.verbose {
            Box::new(SpinnerReporter::new(!self.no_progress))
        } else {
            Box::new(NoopReporter)
        }
    }
}

impl AddCommand {
    /// Validate the parsed arguments into [`AddOptions`].
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidOptions`] when neither components nor `--all` are
    /// given (or both are), or when `--cwd` cannot be resolved.
    pub fn into_options(self, verbose: bool, no_progress: bool) -> Result<AddOptions> {
        if self.components.is_empty() && !self.all {
            return Err(UiError::InvalidOptions {
                reason: "no components specified; pass component names or --all".to_string(),
            }
            .into());
        }
        if !self.components.is_empty() && self.all {
            return Err(UiError::InvalidOptions {
                reason: "component names cannot be combined with --all".to_string(),
            }
            .into());
        }

        let cwd = resolve_absolute(&self.cwd).map_err(|e| UiError::InvalidOptions {
            reason: format!("invalid --cwd: {e}"),
        })?;

        Ok(AddOptions {
            components: self.components,
            all: self.all,
            cwd,
            yes: self.yes,
            overwrite: self.overwrite,
            path: self.path,
            silent: self.silent,
            verbose,
            no_progress,
        })
    }

    /// Execute the add command.
    ///
    /// On a failed preflight the report is printed here and
    /// [`UiError::PreflightFailed`] is returned for `main` to exit on.
    pub async fn execute(self, verbose: bool, no_progress: bool) -> Result<()> {
        let options = self.into_options(verbose, no_progress)?;
        let reporter = options.reporter();

        match run_preflight_add(&options.cwd, &ComponentsJsonLoader, reporter.as_ref()).await {
            PreflightOutcome::Passed(config) => {
                report_ready(&options, &config);
                Ok(())
            }
            PreflightOutcome::Fatal {
                errors,
                diagnostics,
            } => {
                print_report(&diagnostics);
                Err(UiError::PreflightFailed {
                    count: errors.len(),
                }
                .into())
            }
        }
    }
}

fn report_ready(options: &AddOptions, config: &Config) {
    let target = options
        .path
        .as_ref()
        .map(|p| options.cwd.join(p))
        .or_else(|| config.resolved_paths.ui.clone())
        .unwrap_or_else(|| options.cwd.clone());

    tracing::info!(
        "Preflight passed for {} (style: {}, target: {})",
        options.cwd.display(),
        config.raw.style,
        target.display()
    );

    if options.silent {
        return;
    }

    let selection = if options.all {
        "all components".to_string()
    } else {
        options.components.join(", ")
    };
    println!(
        "{} Ready to add {} to {}",
        "✓".green(),
        selection.bright_white(),
        target.display()
    );
}
