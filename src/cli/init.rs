//! Initialize a project with a `components.json` file.
//!
//! # Examples
//!
//! ```bash
//! ui init                       # current directory
//! ui init --cwd ./my-app        # specific project
//! ui init --force --style default --base-color slate
//! ```
//!
//! # Error Conditions
//!
//! - The target directory does not exist
//! - `components.json` already exists and `--force` is not used
//! - The file cannot be written (permissions, disk space, ...)

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tokio::fs;

use crate::config::{RawConfig, write_config};
use crate::constants::CONFIG_FILE_NAME;
use crate::core::UiError;
use crate::utils::resolve_absolute;

/// Command to create a `components.json` in an existing project.
#[derive(Args)]
pub struct InitCommand {
    /// The working directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    cwd: String,

    /// Overwrite an existing components.json
    #[arg(short, long)]
    force: bool,

    /// Component style to record
    #[arg(long)]
    style: Option<String>,

    /// Base color palette to record
    #[arg(long)]
    base_color: Option<String>,

    /// Path of the global CSS file, relative to the project root
    #[arg(long)]
    css: Option<String>,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Writes the default configuration, with any `--style`, `--base-color`
    /// and `--css` overrides applied, to `<cwd>/components.json`.
    pub async fn execute(self) -> Result<()> {
        let cwd = resolve_absolute(&self.cwd)?;
        let is_dir = fs::metadata(&cwd).await.map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            return Err(UiError::DirectoryNotFound {
                path: cwd.display().to_string(),
            }
            .into());
        }

        let config_path = cwd.join(CONFIG_FILE_NAME);
        if fs::try_exists(&config_path).await.unwrap_or(false) && !self.force {
            return Err(UiError::ConfigAlreadyExists {
                path: cwd.display().to_string(),
            }
            .into());
        }

        let mut config = RawConfig::default();
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(base_color) = self.base_color {
            config.tailwind.base_color = base_color;
        }
        if let Some(css) = self.css {
            config.tailwind.css = css;
        }

        write_config(&cwd, &config).await?;
        tracing::debug!("Wrote {}", config_path.display());

        println!("{} Wrote {}", "✓".green(), config_path.display());
        println!("\n{}", "Next steps:".cyan());
        println!("  Add components with {}", "ui add <component>".bright_white());

        Ok(())
    }
}
