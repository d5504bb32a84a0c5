//! Error handling for ui-cli
//!
//! This module provides the error types and user-friendly error reporting used
//! outside the preflight gate. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`UiError`] - Enumerated error types for configuration, filesystem and CLI failures
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for terminal display
//!
//! Preflight check failures are not errors in this sense: the gate records them
//! as [`crate::preflight::PreflightError`] flags and produces its own report.
//! Once that report has been printed the command returns
//! [`UiError::PreflightFailed`], which `main` recognises and exits on silently.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ui_cli::core::{UiError, user_friendly_error};
//!
//! let error = anyhow::Error::from(UiError::ConfigAlreadyExists {
//!     path: "./my-app".to_string(),
//! });
//! let context = user_friendly_error(error);
//! context.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::{CONFIG_DOCS_URL, CONFIG_FILE_NAME};

/// The main error type for ui-cli operations.
#[derive(Error, Debug)]
pub enum UiError {
    /// `components.json` exists but could not be read or parsed.
    #[error("Invalid configuration found in {file}: {reason}")]
    InvalidConfig {
        /// The configuration file
        file: String,
        /// Parser or IO message
        reason: String,
    },

    /// `init` refused to overwrite an existing configuration.
    #[error("A components.json file already exists at {path}")]
    ConfigAlreadyExists {
        /// Path of the existing file
        path: String,
    },

    /// A directory passed via `--cwd` does not exist.
    #[error("Directory does not exist: {path}")]
    DirectoryNotFound {
        /// The missing directory
        path: String,
    },

    /// Command options failed validation.
    #[error("Invalid options: {reason}")]
    InvalidOptions {
        /// What was wrong with the options
        reason: String,
    },

    /// The preflight gate failed and has already printed its report.
    #[error("Preflight checks failed with {count} error(s)")]
    PreflightFailed {
        /// Number of recorded error flags
        count: usize,
    },
}

/// Error wrapper carrying optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The error message shown on the first line
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from any displayable error.
    #[must_use]
    pub fn new(error: impl fmt::Display) -> Self {
        Self {
            message: error.to_string(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions are actionable steps. They are displayed in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error (displayed in yellow).
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognises [`UiError`] variants, [`std::io::Error`] kinds and
/// [`serde_json::Error`]; anything else is shown with its full context chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(ui_error) = error.downcast_ref::<UiError>() {
        return create_error_context(ui_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(&error)
                    .with_suggestion("Check file ownership and permissions for the project directory")
                    .with_details("ui-cli does not have permission to read or write this file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(&error)
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if error.downcast_ref::<serde_json::Error>().is_some() {
        return ErrorContext::new(&error)
            .with_suggestion(format!("Check the JSON syntax in your {CONFIG_FILE_NAME} file"));
    }

    // Keep the whole anyhow chain so `.context(...)` messages are not lost
    ErrorContext::new(format!("{error:#}"))
}

fn create_error_context(error: &UiError) -> ErrorContext {
    match error {
        UiError::InvalidConfig { .. } => ErrorContext::new(error)
            .with_suggestion(format!(
                "Fix the {CONFIG_FILE_NAME} file or recreate it with 'ui init --force'"
            ))
            .with_details(format!("Learn more at {CONFIG_DOCS_URL}")),
        UiError::ConfigAlreadyExists { .. } => ErrorContext::new(error)
            .with_suggestion("Use --force to overwrite the existing configuration"),
        UiError::DirectoryNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Check the --cwd path or create the directory first"),
        UiError::InvalidOptions { .. } => {
            ErrorContext::new(error).with_suggestion("Run the command with --help to see valid options")
        }
        _ => ErrorContext::new(error),
    }
}
