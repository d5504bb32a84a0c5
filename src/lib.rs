//! ui-cli - add UI components to a project configured with `components.json`
//!
//! The crate is organised around the preflight gate that protects the `add`
//! command from running against an unusable project.
//!
//! # Modules
//!
//! - [`preflight`] - checks the target project and aggregates failures into a report
//! - [`config`] - `components.json` schema, loading and path resolution
//! - [`cli`] - `clap` commands (`init`, `add`)
//! - [`core`] - error types and user-friendly error rendering
//! - [`utils`] - path helpers and progress spinners
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ui_cli::config::ComponentsJsonLoader;
//! use ui_cli::preflight::{NoopReporter, run_preflight_add};
//!
//! # async fn example() {
//! let outcome = run_preflight_add(Path::new("."), &ComponentsJsonLoader, &NoopReporter).await;
//! if outcome.is_passed() {
//!     println!("project is ready");
//! }
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod logging;
pub mod preflight;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
