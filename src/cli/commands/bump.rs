//! Bump command implementation.
//!
//! `cairn bump <level>` bumps every workspace manifest. Targets come from
//! `pnpm-workspace.yaml` when present, else the conventional `packages/*`
//! layout; the root manifest is always included. The engine's own
//! commit/push/tag/confirm follow-ups stay disabled here; `cairn commit`
//! and `cairn push` cover that ground when wanted.

use std::path::{Path, PathBuf};

use crate::bump::{run_bump, BumpOptions};
use crate::cli::args::BumpArgs;
use crate::error::Result;
use crate::manifest::{expand_package_globs, PnpmWorkspace};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Fallback target pattern for repositories without a workspace file.
const DEFAULT_PACKAGE_GLOB: &str = "packages/*";

/// The bump command implementation.
pub struct BumpCommand {
    project_root: PathBuf,
    args: BumpArgs,
}

impl BumpCommand {
    /// Create a new bump command.
    pub fn new(project_root: &Path, args: BumpArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Collect target manifests: the root manifest (when present) plus
    /// every workspace pattern match.
    fn target_manifests(&self) -> Result<Vec<PathBuf>> {
        let patterns = match PnpmWorkspace::discover(&self.project_root)? {
            Some(workspace) if !workspace.packages.is_empty() => workspace.packages,
            _ => vec![DEFAULT_PACKAGE_GLOB.to_string()],
        };

        let mut manifests = Vec::new();
        let root_manifest = self.project_root.join("package.json");
        if root_manifest.is_file() {
            manifests.push(root_manifest);
        }

        for path in expand_package_globs(&self.project_root, &patterns) {
            if !manifests.contains(&path) {
                manifests.push(path);
            }
        }

        Ok(manifests)
    }
}

impl Command for BumpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifests = self.target_manifests()?;
        let options = BumpOptions::standalone(self.args.level);

        let outcome = run_bump(&self.project_root, &manifests, &options, ui)?;

        for entry in &outcome.bumped {
            let shown = entry
                .path
                .strip_prefix(&self.project_root)
                .unwrap_or(&entry.path);
            ui.message(&format!(
                "{}: {} -> {}",
                shown.display(),
                entry.previous,
                entry.next
            ));
        }

        ui.success("bump success!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bump::BumpLevel;
    use crate::manifest::read_version;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn package(temp: &TempDir, rel: &str, version: &str) -> PathBuf {
        let dir = temp.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("package.json");
        fs::write(&path, format!(r#"{{"version": "{}"}}"#, version)).unwrap();
        path
    }

    #[test]
    fn workspace_globs_plus_root_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("pnpm-workspace.yaml"),
            "packages:\n  - \"apps/*\"\n  - \"libs/*\"\n",
        )
        .unwrap();
        let root = package(&temp, ".", "1.0.0");
        let web = package(&temp, "apps/web", "0.2.0");
        let ui_lib = package(&temp, "libs/ui", "3.1.4");

        let cmd = BumpCommand::new(
            temp.path(),
            BumpArgs {
                level: BumpLevel::Minor,
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(read_version(&root).unwrap(), Some("1.1.0".to_string()));
        assert_eq!(read_version(&web).unwrap(), Some("0.3.0".to_string()));
        assert_eq!(read_version(&ui_lib).unwrap(), Some("3.2.0".to_string()));
        assert!(ui.has_success("bump success!"));
    }

    #[test]
    fn default_glob_when_no_workspace_file() {
        let temp = TempDir::new().unwrap();
        let root = package(&temp, ".", "0.1.0");
        let pkg = package(&temp, "packages/core", "0.1.0");
        // Outside the default pattern, must stay untouched.
        let stray = package(&temp, "apps/web", "9.9.9");

        let cmd = BumpCommand::new(
            temp.path(),
            BumpArgs {
                level: BumpLevel::Patch,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(read_version(&root).unwrap(), Some("0.1.1".to_string()));
        assert_eq!(read_version(&pkg).unwrap(), Some("0.1.1".to_string()));
        assert_eq!(read_version(&stray).unwrap(), Some("9.9.9".to_string()));
    }

    #[test]
    fn root_manifest_is_not_required() {
        let temp = TempDir::new().unwrap();
        let pkg = package(&temp, "packages/core", "2.0.0");

        let cmd = BumpCommand::new(
            temp.path(),
            BumpArgs {
                level: BumpLevel::Major,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(read_version(&pkg).unwrap(), Some("3.0.0".to_string()));
    }

    #[test]
    fn bumped_manifests_are_reported() {
        let temp = TempDir::new().unwrap();
        package(&temp, ".", "1.0.0");

        let cmd = BumpCommand::new(
            temp.path(),
            BumpArgs {
                level: BumpLevel::Patch,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("1.0.0 -> 1.0.1"));
    }

    #[test]
    fn workspace_file_without_packages_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-workspace.yaml"), "catalog: {}\n").unwrap();
        let pkg = package(&temp, "packages/core", "1.2.3");

        let cmd = BumpCommand::new(
            temp.path(),
            BumpArgs {
                level: BumpLevel::Patch,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(read_version(&pkg).unwrap(), Some("1.2.4".to_string()));
    }
}
