//! Commit command implementation.
//!
//! `cairn commit <message>` stages all changes and commits them. git's
//! own failures (e.g. nothing to commit) surface verbatim.

use std::path::{Path, PathBuf};

use crate::cli::args::CommitArgs;
use crate::error::Result;
use crate::shell::{run, shell_quote};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The commit command implementation.
pub struct CommitCommand {
    project_root: PathBuf,
    args: CommitArgs,
}

impl CommitCommand {
    /// Create a new commit command.
    pub fn new(project_root: &Path, args: CommitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CommitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run("git add -A", Some(&self.project_root))?;
        let committed = run(
            &format!("git commit -m {}", shell_quote(&self.args.message)),
            Some(&self.project_root),
        )?;
        super::show_output(ui, &committed);

        ui.success("commit success!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn commit_command_creation() {
        let temp = TempDir::new().unwrap();
        let args = CommitArgs {
            message: "feat: add detection".to_string(),
        };
        let cmd = CommitCommand::new(temp.path(), args);

        assert_eq!(cmd.project_root, temp.path());
        assert_eq!(cmd.args.message, "feat: add detection");
    }
}
