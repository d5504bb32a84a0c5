//! Platform helpers for resolving user-supplied paths.
//!
//! The `--cwd` option accepts paths such as `~/apps/web` or `$WORK/web`; these
//! helpers expand them and make them absolute so the preflight checks and the
//! diagnostics always refer to a full path.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Checks if the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Gets the home directory path for the current user.
///
/// # Errors
///
/// Returns an error when the home directory cannot be determined (for example
/// when `HOME` / `USERPROFILE` is unset).
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Expands `~/` and environment variables in a path string.
///
/// Only `~/` (current user) is supported for tilde expansion; `~user` forms are
/// rejected. Variables use `$VAR` / `${VAR}` syntax; undefined variables are
/// left as written.
///
/// # Examples
///
/// ```rust,no_run
/// use ui_cli::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let path = resolve_path("~/apps/web")?;
/// let path = resolve_path("$HOME/apps/web")?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        get_home_dir()?.join(stripped)
    } else if path == "~" {
        get_home_dir()?
    } else if path.starts_with('~') {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/apps/web'"
        ));
    } else {
        PathBuf::from(path)
    };

    // Unknown variables stay literal so paths like `./my$app` still resolve
    let path_str = expanded.to_string_lossy();
    let expanded_str =
        shellexpand::env_with_context_no_errors(&path_str, |var| std::env::var(var).ok())
            .into_owned();

    Ok(PathBuf::from(expanded_str))
}

/// Resolves a path string to an absolute path without touching the filesystem.
///
/// The path does not need to exist; relative paths are joined to the current
/// working directory and `.`/`..` components are normalised lexically.
pub fn resolve_absolute(path: &str) -> Result<PathBuf> {
    let expanded = resolve_path(path)?;
    let absolute = std::path::absolute(&expanded)
        .with_context(|| format!("Failed to resolve path: {}", expanded.display()))?;
    Ok(normalize_path(&absolute))
}

/// Lexically normalises `.` and `..` components.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
