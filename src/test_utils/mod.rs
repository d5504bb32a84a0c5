//! Test utilities for ui-cli
//!
//! Helpers for building throwaway projects on disk and for enabling logging in
//! tests. Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.
//!
//! # Example
//!
//! ```rust,no_run
//! use ui_cli::test_utils::TestProject;
//!
//! let project = TestProject::new().unwrap().with_package_json().unwrap();
//! project.write_default_config().unwrap();
//! assert!(project.path().join("components.json").exists());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Result;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::RawConfig;
use crate::constants::{CONFIG_FILE_NAME, PACKAGE_MANIFEST_FILE_NAME};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`. Without either, nothing is
/// logged. Only the first call has any effect.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// A temporary project directory, removed on drop.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    ///
    /// Also enables test logging when `RUST_LOG` is set.
    pub fn new() -> Result<Self> {
        init_test_logging(None);
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Root of the project.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path inside the project that does not exist.
    #[must_use]
    pub fn missing_path(&self) -> PathBuf {
        self.path().join("does-not-exist")
    }

    /// Add a minimal `package.json`.
    pub fn with_package_json(self) -> Result<Self> {
        self.write_file(PACKAGE_MANIFEST_FILE_NAME, r#"{ "name": "test-app", "private": true }"#)?;
        Ok(self)
    }

    /// Write the default `components.json`.
    pub fn write_default_config(&self) -> Result<()> {
        self.write_config(&RawConfig::default())
    }

    /// Write `config` as `components.json`.
    pub fn write_config(&self, config: &RawConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        self.write_file(CONFIG_FILE_NAME, &content)
    }

    /// Write raw text as `components.json`.
    pub fn write_config_raw(&self, content: &str) -> Result<()> {
        self.write_file(CONFIG_FILE_NAME, content)
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
