//! Release command implementation.
//!
//! `cairn release` creates a GitHub release for the current version via
//! the gh CLI. Preconditions are checked before anything runs: gh must be
//! installed (no auto-install) and the remote must be a GitHub URL. The
//! version comes from `package.json`, falling back to the most recent git
//! tag; if neither yields one the command fails rather than guessing.

use std::path::{Path, PathBuf};

use crate::error::{CairnError, Result};
use crate::manifest::read_version;
use crate::shell::{execute_check, execute_quiet, run, shell_quote};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The release command implementation.
pub struct ReleaseCommand {
    project_root: PathBuf,
}

impl ReleaseCommand {
    /// Create a new release command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Resolve the release version: manifest field first, then the most
    /// recent tag description.
    fn resolve_version(&self) -> Result<String> {
        if let Some(version) = read_version(&self.project_root.join("package.json"))? {
            return Ok(version);
        }

        let described = execute_quiet("git describe --abbrev=0 --tags", Some(&self.project_root))?;
        if described.success {
            let tag = described.stdout.trim();
            if !tag.is_empty() {
                return Ok(tag.to_string());
            }
        }

        Err(CairnError::VersionNotResolved)
    }
}

impl Command for ReleaseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !execute_check("gh --version", Some(&self.project_root)) {
            return Err(CairnError::RequirementMissing {
                requirement: "gh".to_string(),
                message: "install https://cli.github.com/ to use this command".to_string(),
            });
        }

        let remotes = run("git remote -v", Some(&self.project_root))?;
        if !is_github_remote(&remotes.stdout) {
            return Err(CairnError::NonGitHubRemote);
        }

        let version = self.resolve_version()?;
        let notes = notes_args(&self.project_root);

        let created = run(&release_command(&version, notes), Some(&self.project_root))?;
        super::show_output(ui, &created);

        ui.success(&format!("release {} success!", version));
        Ok(CommandResult::success())
    }
}

/// GitHub-hosted check: a literal containment test on `git remote -v`
/// output.
fn is_github_remote(remote_output: &str) -> bool {
    remote_output.contains("https://github.com")
}

/// Release notes flag: a checked-in changelog wins over generated notes.
fn notes_args(project_root: &Path) -> &'static str {
    if project_root.join("CHANGELOG.md").exists() {
        "--notes-file CHANGELOG.md"
    } else {
        "--generate-notes"
    }
}

/// The gh invocation, with the version as both tag and title.
fn release_command(version: &str, notes: &str) -> String {
    let version = shell_quote(version);
    format!(
        "gh release create {} --title {} --verify-tag {}",
        version, version, notes
    )
}
