//! Publish command implementation.
//!
//! `cairn publish` picks the publish strategy from the detected
//! workspace: a monorepo tool delegates to lerna, a pnpm workspace
//! publishes recursively, anything else is a plain single-package
//! publish with the detected manager.

use std::path::{Path, PathBuf};

use crate::detection::{PackageManager, WorkspaceDetection};
use crate::error::Result;
use crate::shell::run;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The publish command implementation.
pub struct PublishCommand {
    project_root: PathBuf,
    detection: WorkspaceDetection,
}

impl PublishCommand {
    /// Create a new publish command.
    pub fn new(project_root: &Path, detection: WorkspaceDetection) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            detection,
        }
    }
}

impl Command for PublishCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let published = run(&publish_command(&self.detection), Some(&self.project_root))?;
        super::show_output(ui, &published);

        ui.success("publish success!");
        Ok(CommandResult::success())
    }
}

/// The publish invocation for a detected workspace.
fn publish_command(detection: &WorkspaceDetection) -> String {
    if detection.has_monorepo_tool() {
        "lerna publish from-package --yes --no-push --force-publish".to_string()
    } else if detection.is_pnpm_workspace && detection.package_manager == PackageManager::Pnpm {
        "pnpm -r publish --access public --no-git-checks".to_string()
    } else {
        format!("{} publish", detection.package_manager.binary())
    }
}
