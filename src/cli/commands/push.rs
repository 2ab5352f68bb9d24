//! Push command implementation.
//!
//! `cairn push` pushes the current branch to origin. A detached HEAD (or
//! anything else that leaves `git branch --show-current` empty) falls
//! back to `main`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{run, shell_quote};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The push command implementation.
pub struct PushCommand {
    project_root: PathBuf,
}

impl PushCommand {
    /// Create a new push command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for PushCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = run("git branch --show-current", Some(&self.project_root))?;
        let branch = push_target(&result.stdout);

        run(
            &format!("git push origin {}", shell_quote(branch)),
            Some(&self.project_root),
        )?;

        ui.success("push success!");
        Ok(CommandResult::success())
    }
}

/// Branch to push to, defaulting to `main` when none is reported.
fn push_target(branch_output: &str) -> &str {
    let branch = branch_output.trim();
    if branch.is_empty() {
        "main"
    } else {
        branch
    }
}
