//! Project configuration (`components.json`) loading.
//!
//! The configuration lives at the project root and is created by `ui init`.
//! Loading happens in two steps:
//!
//! 1. [`get_raw_config`] reads and parses the file into a [`RawConfig`]
//! 2. [`get_config`] additionally resolves aliases and tailwind paths into
//!    [`ResolvedPaths`]
//!
//! A missing file is `Ok(None)`; a file that exists but cannot be read or
//! parsed is an [`UiError::InvalidConfig`] error. The preflight gate consumes
//! this through the [`ConfigLoader`] trait and treats both outcomes as a failed
//! read.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ui_cli::config::get_config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! if let Some(config) = get_config(Path::new("./my-app")).await? {
//!     println!("style: {}", config.raw.style);
//! }
//! # Ok(())
//! # }
//! ```

mod paths;
mod schema;

pub use paths::{PathAliases, resolve_config_paths};
pub use schema::{Aliases, Config, RawConfig, ResolvedPaths, TailwindConfig};

use anyhow::{Context, Result};
use std::future::Future;
use std::path::Path;
use tokio::fs;

use crate::constants::CONFIG_FILE_NAME;
use crate::core::UiError;

/// Reads `<cwd>/components.json` without resolving any paths.
///
/// # Errors
///
/// Returns [`UiError::InvalidConfig`] when the file exists but cannot be read
/// or does not match the schema.
pub async fn get_raw_config(cwd: &Path) -> Result<Option<RawConfig>> {
    let path = cwd.join(CONFIG_FILE_NAME);
    if !fs::try_exists(&path).await.unwrap_or(false) {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).await.map_err(|e| UiError::InvalidConfig {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let raw = serde_json::from_str::<RawConfig>(&content).map_err(|e| UiError::InvalidConfig {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(Some(raw))
}

/// Reads `<cwd>/components.json` and resolves its paths.
///
/// # Errors
///
/// Same as [`get_raw_config`].
pub async fn get_config(cwd: &Path) -> Result<Option<Config>> {
    let Some(raw) = get_raw_config(cwd).await? else {
        return Ok(None);
    };

    let resolved_paths = resolve_config_paths(cwd, &raw).await;
    tracing::debug!("Loaded {} from {}", CONFIG_FILE_NAME, cwd.display());

    Ok(Some(Config {
        raw,
        resolved_paths,
    }))
}

/// Writes `config` as pretty-printed JSON to `<cwd>/components.json`.
pub async fn write_config(cwd: &Path, config: &RawConfig) -> Result<()> {
    let path = cwd.join(CONFIG_FILE_NAME);
    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Source of the project configuration consumed by the preflight gate.
///
/// `Ok(None)` means "no configuration"; `Err` means it exists but is unusable.
pub trait ConfigLoader {
    /// Loads the configuration for the project rooted at `cwd`.
    fn load(&self, cwd: &Path) -> impl Future<Output = Result<Option<Config>>> + Send;
}

/// The production loader: reads `components.json` via [`get_config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentsJsonLoader;

impl ConfigLoader for ComponentsJsonLoader {
    async fn load(&self, cwd: &Path) -> Result<Option<Config>> {
        get_config(cwd).await
    }
}
