//! Progress reporting hooks for the preflight gate.
//!
//! The gate calls [`PreflightReporter::start`] before the first check and then
//! exactly one of [`succeed`](PreflightReporter::succeed) or
//! [`fail`](PreflightReporter::fail). Reporting never affects the outcome.

use crate::utils::progress::{ProgressBar, is_progress_disabled};
use std::sync::Mutex;

/// Receives progress notifications from the preflight gate.
pub trait PreflightReporter {
    /// Checks are about to run.
    fn start(&self, message: &str);
    /// All checks passed.
    fn succeed(&self);
    /// At least one check failed.
    fn fail(&self);
}

/// Reporter used when `--verbose` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl PreflightReporter for NoopReporter {
    fn start(&self, _message: &str) {}
    fn succeed(&self) {}
    fn fail(&self) {}
}

/// Shows a spinner while the checks run and resolves it to a ✔ or ✖.
#[derive(Default)]
pub struct SpinnerReporter {
    visible: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    /// A reporter whose spinner is drawn only when `visible` is true and
    /// `UI_NO_PROGRESS` is unset.
    #[must_use]
    pub fn new(visible: bool) -> Self {
        Self {
            visible: visible && !is_progress_disabled(),
            spinner: Mutex::new(None),
        }
    }

    /// The current spinner, if [`start`](PreflightReporter::start) was called.
    #[must_use]
    pub fn spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|guard| guard.clone())
    }
}

impl PreflightReporter for SpinnerReporter {
    fn start(&self, message: &str) {
        if self.visible {
            eprintln!();
        }
        let spinner = ProgressBar::spinner(self.visible);
        spinner.set_message(message);
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(spinner);
        }
    }

    fn succeed(&self) {
        if let Some(spinner) = self.spinner() {
            spinner.succeed();
        }
    }

    fn fail(&self) {
        if let Some(spinner) = self.spinner() {
            spinner.fail();
        }
    }
}
