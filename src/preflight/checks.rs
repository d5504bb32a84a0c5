//! Individual filesystem checks run by the gate.
//!
//! Each check answers a yes/no question about the target; none of them
//! returns an error. IO failures while probing count as "not there".

use std::path::Path;
use tokio::fs;

use crate::constants::{CONFIG_FILE_NAME, PACKAGE_MANIFEST_FILE_NAME};

/// Whether `cwd` is an existing directory with a `package.json` at its root.
pub async fn is_viable_project(cwd: &Path) -> bool {
    let is_dir = fs::metadata(cwd).await.map(|m| m.is_dir()).unwrap_or(false);
    is_dir && exists(&cwd.join(PACKAGE_MANIFEST_FILE_NAME)).await
}

/// Whether `<cwd>/components.json` exists.
pub async fn has_config_file(cwd: &Path) -> bool {
    exists(&cwd.join(CONFIG_FILE_NAME)).await
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_directory_is_not_viable() {
        let temp = TempDir::new().unwrap();
        assert!(!is_viable_project(&temp.path().join("missing")).await);
    }

    #[tokio::test]
    async fn test_directory_without_manifest_is_not_viable() {
        let temp = TempDir::new().unwrap();
        assert!(!is_viable_project(temp.path()).await);

        std::fs::write(temp.path().join(PACKAGE_MANIFEST_FILE_NAME), "{}").unwrap();
        assert!(is_viable_project(temp.path()).await);
    }

    #[tokio::test]
    async fn test_file_target_is_not_viable() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        assert!(!is_viable_project(&file).await);
    }

    #[tokio::test]
    async fn test_has_config_file() {
        let temp = TempDir::new().unwrap();
        assert!(!has_config_file(temp.path()).await);

        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "not even json").unwrap();
        assert!(has_config_file(temp.path()).await);
    }
}
