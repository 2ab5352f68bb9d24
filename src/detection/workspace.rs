//! Package manager and monorepo tooling detection.
//!
//! Everything is derived from marker files in the project root. Detection
//! is a pure query over the filesystem: it runs once per invocation and
//! the result is read-only afterward.

use std::fmt;
use std::path::Path;

use super::file_detection::file_exists;

/// Detected package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// The CLI binary name for this manager.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Result of workspace detection.
#[derive(Debug, Clone)]
pub struct WorkspaceDetection {
    /// Active package manager, chosen by lockfile priority.
    pub package_manager: PackageManager,

    /// `lerna.json` present.
    pub has_lerna: bool,

    /// `nx.json` present.
    pub has_nx: bool,

    /// `pnpm-workspace.yaml` present.
    pub is_pnpm_workspace: bool,
}

impl WorkspaceDetection {
    /// Whether a monorepo orchestration tool (Lerna or Nx) is present.
    pub fn has_monorepo_tool(&self) -> bool {
        self.has_lerna || self.has_nx
    }
}

/// Detect the workspace environment for a project root.
///
/// Package manager priority: `pnpm-lock.yaml` > `yarn.lock` > `bun.lock`,
/// defaulting to npm when no lockfile is present. The monorepo and
/// workspace flags are independent of the manager chain. There are no
/// error conditions; an empty directory yields the npm/non-monorepo
/// default.
pub fn detect(project_root: &Path) -> WorkspaceDetection {
    let package_manager = if file_exists(project_root, "pnpm-lock.yaml") {
        PackageManager::Pnpm
    } else if file_exists(project_root, "yarn.lock") {
        PackageManager::Yarn
    } else if file_exists(project_root, "bun.lock") {
        PackageManager::Bun
    } else {
        PackageManager::Npm
    };

    let detection = WorkspaceDetection {
        package_manager,
        has_lerna: file_exists(project_root, "lerna.json"),
        has_nx: file_exists(project_root, "nx.json"),
        is_pnpm_workspace: file_exists(project_root, "pnpm-workspace.yaml"),
    };

    tracing::debug!(
        "detected manager={} lerna={} nx={} pnpm_workspace={}",
        detection.package_manager,
        detection.has_lerna,
        detection.has_nx,
        detection.is_pnpm_workspace
    );

    detection
}
