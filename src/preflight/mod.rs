//! Preflight gate for the `add` command.
//!
//! Before `add` writes anything into a project, the gate verifies that:
//!
//! 1. the target is an existing directory containing `package.json`
//! 2. the target contains a `components.json`
//! 3. the configuration loader can actually load that `components.json`
//!
//! Every check runs, even after an earlier one failed, and each failure is
//! recorded as a [`PreflightError`] flag. The gate never prints or exits on its
//! own: it returns a [`PreflightOutcome`], and the CLI decides what to do with a
//! [`PreflightOutcome::Fatal`] (print [`print_report`], exit with status 1).
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ui_cli::config::ComponentsJsonLoader;
//! use ui_cli::preflight::{NoopReporter, PreflightOutcome, print_report, run_preflight_add};
//!
//! # async fn example() {
//! match run_preflight_add(Path::new("./my-app"), &ComponentsJsonLoader, &NoopReporter).await {
//!     PreflightOutcome::Passed(config) => println!("style: {}", config.raw.style),
//!     PreflightOutcome::Fatal { diagnostics, .. } => {
//!         print_report(&diagnostics);
//!         std::process::exit(1);
//!     }
//! }
//! # }
//! ```

mod checks;
mod errors;
mod report;
mod reporter;

pub use checks::{has_config_file, is_viable_project};
pub use errors::{PreflightError, PreflightErrors};
pub use report::{Diagnostic, build_diagnostics, print_report};
pub use reporter::{NoopReporter, PreflightReporter, SpinnerReporter};

use std::path::Path;

use crate::config::{Config, ConfigLoader};
use crate::constants::PREFLIGHT_SPINNER_MESSAGE;

/// Result of one gate run.
#[derive(Debug)]
pub enum PreflightOutcome {
    /// All checks passed; carries the loaded configuration.
    Passed(Config),
    /// At least one check failed.
    Fatal {
        /// Every flag that was recorded.
        errors: PreflightErrors,
        /// The report to show, in display order.
        diagnostics: Vec<Diagnostic>,
    },
}

impl PreflightOutcome {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    /// The recorded flags; empty when the gate passed.
    #[must_use]
    pub fn errors(&self) -> PreflightErrors {
        match self {
            Self::Passed(_) => PreflightErrors::new(),
            Self::Fatal { errors, .. } => errors.clone(),
        }
    }

    /// The loaded configuration, if the gate passed.
    #[must_use]
    pub fn into_config(self) -> Option<Config> {
        match self {
            Self::Passed(config) => Some(config),
            Self::Fatal { .. } => None,
        }
    }
}

/// Runs the preflight checks for `add` against the project at `cwd`.
///
/// Checks run sequentially and unconditionally; the loader is always invoked,
/// even when `components.json` is already known to be missing.
pub async fn run_preflight_add<L: ConfigLoader>(
    cwd: &Path,
    loader: &L,
    reporter: &dyn PreflightReporter,
) -> PreflightOutcome {
    let mut errors = PreflightErrors::new();
    reporter.start(PREFLIGHT_SPINNER_MESSAGE);
    tracing::debug!("Running preflight checks for {}", cwd.display());

    if !is_viable_project(cwd).await {
        errors.insert(PreflightError::MissingDirOrEmptyProject);
    }

    if !has_config_file(cwd).await {
        errors.insert(PreflightError::MissingConfig);
    }

    let config = match loader.load(cwd).await {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Configuration load failed: {:#}", e);
            None
        }
    };
    if config.is_none() {
        errors.insert(PreflightError::FailedConfigRead);
    }

    match config {
        Some(config) if errors.is_empty() => {
            reporter.succeed();
            PreflightOutcome::Passed(config)
        }
        _ => {
            reporter.fail();
            tracing::debug!("Preflight failed with {}", errors);
            let diagnostics = build_diagnostics(&errors, cwd);
            PreflightOutcome::Fatal {
                errors,
                diagnostics,
            }
        }
    }
}
