//! Rendering of recorded preflight errors into user-facing diagnostics.
//!
//! `MissingConfig` takes precedence over `FailedConfigRead`: when both are
//! recorded only the missing-config message is shown, since the read failure
//! is a consequence of the file not existing.

use colored::Colorize;
use std::path::Path;

use super::errors::{PreflightError, PreflightErrors};
use crate::constants::{CONFIG_DOCS_URL, CONFIG_FILE_NAME};

/// One entry of the preflight failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The flag this entry reports.
    pub kind: PreflightError,
    /// The message, possibly spanning several lines.
    pub message: String,
    /// Documentation link shown on its own line after the message.
    pub learn_more: Option<&'static str>,
}

impl Diagnostic {
    fn new(kind: PreflightError, message: String) -> Self {
        Self {
            kind,
            message,
            learn_more: None,
        }
    }

    fn with_learn_more(mut self, url: &'static str) -> Self {
        self.learn_more = Some(url);
        self
    }

    /// The printable lines of this entry.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.message.lines().map(str::to_string).collect();
        if let Some(url) = self.learn_more {
            lines.push(format!("Learn more at {}.", highlight(url)));
        }
        lines
    }
}

fn highlight(text: &str) -> String {
    text.cyan().to_string()
}

/// Builds the ordered report for `errors` about the project at `cwd`.
#[must_use]
pub fn build_diagnostics(errors: &PreflightErrors, cwd: &Path) -> Vec<Diagnostic> {
    let cwd = cwd.display().to_string();
    let mut diagnostics = Vec::new();

    if errors.contains(PreflightError::MissingDirOrEmptyProject) {
        diagnostics.push(Diagnostic::new(
            PreflightError::MissingDirOrEmptyProject,
            format!("The path {} does not exist or is empty.", highlight(&cwd)),
        ));
    }

    if errors.contains(PreflightError::MissingConfig) {
        diagnostics.push(
            Diagnostic::new(
                PreflightError::MissingConfig,
                format!(
                    "A {file} file was not found at {cwd}.\n\
                     Before you can add components, you must create a {file} file by running the {init} command.",
                    file = highlight(CONFIG_FILE_NAME),
                    cwd = highlight(&cwd),
                    init = highlight("init"),
                ),
            )
            .with_learn_more(CONFIG_DOCS_URL),
        );
    } else if errors.contains(PreflightError::FailedConfigRead) {
        diagnostics.push(Diagnostic::new(
            PreflightError::FailedConfigRead,
            format!("Failed to read the {} file.", highlight(CONFIG_FILE_NAME)),
        ));
    }

    diagnostics
}

/// Prints the report to stderr, framed by blank lines.
pub fn print_report(diagnostics: &[Diagnostic]) {
    eprintln!();
    for diagnostic in diagnostics {
        for line in diagnostic.lines() {
            eprintln!("{}", line.red());
        }
    }
    eprintln!();
}
