//! Cross-platform utilities for ui-cli
//!
//! - [`platform`] - path expansion and normalisation for user-supplied paths
//! - [`progress`] - spinners that respect `--no-progress`

pub mod platform;
pub mod progress;

pub use platform::{normalize_path, resolve_absolute, resolve_path};
pub use progress::{ProgressBar, is_progress_disabled};
