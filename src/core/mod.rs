//! Core types shared across ui-cli.
//!
//! Currently this is the error taxonomy and the user-facing error rendering
//! used by `main` and the command implementations.

pub mod error;

pub use error::{ErrorContext, UiError, user_friendly_error};
