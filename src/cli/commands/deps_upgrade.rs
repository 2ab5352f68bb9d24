//! Deps-upgrade command implementation.
//!
//! `cairn deps-upgrade` rewrites dependency ranges to their latest
//! versions with npm-check-updates, then reinstalls with the detected
//! manager. Bun projects are refused up front: npm-check-updates does not
//! rewrite bun lockfiles, so the reinstall would silently diverge.

use std::path::{Path, PathBuf};

use crate::detection::{PackageManager, WorkspaceDetection};
use crate::error::{CairnError, Result};
use crate::shell::run;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The deps-upgrade command implementation.
pub struct DepsUpgradeCommand {
    project_root: PathBuf,
    detection: WorkspaceDetection,
}

impl DepsUpgradeCommand {
    /// Create a new deps-upgrade command.
    pub fn new(project_root: &Path, detection: WorkspaceDetection) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            detection,
        }
    }

    /// Precondition checks; both fire before any external call.
    fn check_preconditions(&self) -> Result<()> {
        let manifest = self.project_root.join("package.json");
        if !manifest.exists() {
            return Err(CairnError::ManifestNotFound { path: manifest });
        }

        if self.detection.package_manager == PackageManager::Bun {
            return Err(CairnError::UnsupportedManager {
                manager: "bun".to_string(),
                command: "deps-upgrade".to_string(),
                message: "npm-check-updates does not rewrite bun lockfiles".to_string(),
            });
        }

        Ok(())
    }
}

impl Command for DepsUpgradeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.check_preconditions()?;

        let upgraded = run("npx npm-check-updates -u", Some(&self.project_root))?;
        super::show_output(ui, &upgraded);

        let installed = run(
            &format!("{} install", self.detection.package_manager.binary()),
            Some(&self.project_root),
        )?;
        super::show_output(ui, &installed);

        ui.success("deps-upgrade success!");
        Ok(CommandResult::success())
    }
}
