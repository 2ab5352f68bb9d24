//! Revert command implementation.
//!
//! `cairn revert` resets one commit back, keeping the changes staged;
//! `cairn revert hard` discards them.

use std::path::{Path, PathBuf};

use crate::cli::args::RevertArgs;
use crate::error::Result;
use crate::shell::run;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The revert command implementation.
pub struct RevertCommand {
    project_root: PathBuf,
    args: RevertArgs,
}

impl RevertCommand {
    /// Create a new revert command.
    pub fn new(project_root: &Path, args: RevertArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for RevertCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run(
            reset_command(self.args.target.as_deref()),
            Some(&self.project_root),
        )?;

        ui.success("revert success!");
        Ok(CommandResult::success())
    }
}

/// The reset invocation for a target; only the literal `hard` escalates.
fn reset_command(target: Option<&str>) -> &'static str {
    if target == Some("hard") {
        "git reset --hard HEAD~1"
    } else {
        "git reset HEAD~1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reset_is_soft() {
        assert_eq!(reset_command(None), "git reset HEAD~1");
    }

    #[test]
    fn hard_marker_escalates() {
        assert_eq!(reset_command(Some("hard")), "git reset --hard HEAD~1");
    }

    #[test]
    fn other_targets_stay_soft() {
        assert_eq!(reset_command(Some("false")), "git reset HEAD~1");
        assert_eq!(reset_command(Some("HARD")), "git reset HEAD~1");
    }
}
