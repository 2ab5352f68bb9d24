//! `pnpm-workspace.yaml` parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CairnError, Result};

/// Parsed pnpm workspace definition.
///
/// Only the `packages` pattern list is consumed; the order of patterns is
/// preserved as written.
#[derive(Debug, Clone, Deserialize)]
pub struct PnpmWorkspace {
    /// Package directory glob patterns.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl PnpmWorkspace {
    /// Load a workspace definition from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|_| CairnError::ManifestNotFound {
            path: path.to_path_buf(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CairnError::WorkspaceParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the workspace definition from a project root, if present.
    pub fn discover(project_root: &Path) -> Result<Option<Self>> {
        let path = project_root.join("pnpm-workspace.yaml");
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_parses_packages_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pnpm-workspace.yaml");
        fs::write(&path, "packages:\n  - \"apps/*\"\n  - \"libs/*\"\n").unwrap();

        let workspace = PnpmWorkspace::load(&path).unwrap();

        assert_eq!(workspace.packages, vec!["apps/*", "libs/*"]);
    }

    #[test]
    fn load_defaults_packages_when_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pnpm-workspace.yaml");
        fs::write(&path, "catalog:\n  react: ^18.0.0\n").unwrap();

        let workspace = PnpmWorkspace::load(&path).unwrap();

        assert!(workspace.packages.is_empty());
    }

    #[test]
    fn load_fails_on_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pnpm-workspace.yaml");
        fs::write(&path, "packages: [unclosed\n").unwrap();

        assert!(matches!(
            PnpmWorkspace::load(&path),
            Err(CairnError::WorkspaceParseError { .. })
        ));
    }

    #[test]
    fn discover_returns_none_without_file() {
        let temp = TempDir::new().unwrap();

        assert!(PnpmWorkspace::discover(temp.path()).unwrap().is_none());
    }

    #[test]
    fn discover_loads_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("pnpm-workspace.yaml"),
            "packages:\n  - \"packages/*\"\n",
        )
        .unwrap();

        let workspace = PnpmWorkspace::discover(temp.path()).unwrap().unwrap();
        assert_eq!(workspace.packages, vec!["packages/*"]);
    }
}
