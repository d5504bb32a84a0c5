//! Progress indicators and user interface utilities
//!
//! Thin wrapper around `indicatif` spinners with consistent styling. Spinners
//! are hidden when the `UI_NO_PROGRESS` environment variable is set or when
//! the caller asks for a hidden spinner (`--no-progress`), which keeps output
//! clean in CI and in tests.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ui_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::new_spinner();
//! spinner.set_message("Preflight checks.");
//! // ... run the checks ...
//! spinner.succeed();
//! ```

use colored::Colorize;
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

use crate::constants::NO_PROGRESS_ENV;

/// Checks if progress indicators should be disabled.
///
/// Returns `true` when `UI_NO_PROGRESS` is set to any value.
#[must_use]
pub fn is_progress_disabled() -> bool {
    std::env::var(NO_PROGRESS_ENV).is_ok()
}

/// A spinner with consistent styling and cross-platform behavior.
///
/// When progress is disabled the underlying bar is hidden and every operation
/// is a silent no-op.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a spinner for indeterminate progress operations.
    ///
    /// The spinner uses Braille patterns (`⠋ ⠙ ⠹ ⠸ ⠼ ⠴ ⠦ ⠧ ⠇ ⠏`) and ticks every 100ms.
    /// Hidden when `UI_NO_PROGRESS` is set.
    pub fn new_spinner() -> Self {
        Self::spinner(!is_progress_disabled())
    }

    /// Creates a spinner, hidden unless `visible` is true.
    pub fn spinner(visible: bool) -> Self {
        let bar = if !visible {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// Sets the message displayed next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Returns the current spinner message.
    pub fn message(&self) -> String {
        self.inner.message()
    }

    /// Whether this spinner is hidden (progress disabled).
    pub fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }

    /// The glyph set by [`succeed`](Self::succeed) or [`fail`](Self::fail).
    pub fn prefix(&self) -> String {
        self.inner.prefix()
    }

    /// Whether the spinner has been finished.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Stops the spinner and replaces the line with `msg`.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Stops the spinner and removes it from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }

    /// Resolves the spinner to a green check mark, keeping its message.
    pub fn succeed(&self) {
        self.finish_glyph("✔".green().to_string());
    }

    /// Resolves the spinner to a red cross, keeping its message.
    pub fn fail(&self) {
        self.finish_glyph("✖".red().to_string());
    }

    fn finish_glyph(&self, glyph: String) {
        self.inner.set_style(finished_style());
        self.inner.set_prefix(glyph);
        self.inner.finish();
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
}

fn finished_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner().template("{prefix} {msg}").unwrap()
}
