//! Actions-up passthrough command.
//!
//! `cairn actions-up` forwards to actions-up
//! (<https://github.com/azat-io/actions-up>), which pins and updates the
//! GitHub Actions used by the repository's workflows. One invocation, no
//! branching.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::run;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The actions-up passthrough implementation.
pub struct ActionsUpCommand {
    project_root: PathBuf,
}

impl ActionsUpCommand {
    /// Create a new actions-up command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for ActionsUpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = run("npx actions-up", Some(&self.project_root))?;
        super::show_output(ui, &result);

        ui.success("actions-up success!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn actions_up_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ActionsUpCommand::new(temp.path());

        assert_eq!(cmd.project_root, temp.path());
    }
}
