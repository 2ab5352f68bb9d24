//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::detection;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Workspace detection runs once here; the commands that branch on it
    /// receive the result and never re-detect.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detection = detection::detect(&self.project_root);

        match &cli.command {
            Commands::Commit(args) => {
                let cmd = super::commit::CommitCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Commands::Push => {
                let cmd = super::push::PushCommand::new(&self.project_root);
                cmd.execute(ui)
            }
            Commands::Publish => {
                let cmd = super::publish::PublishCommand::new(&self.project_root, detection);
                cmd.execute(ui)
            }
            Commands::Release => {
                let cmd = super::release::ReleaseCommand::new(&self.project_root);
                cmd.execute(ui)
            }
            Commands::DepsUpgrade => {
                let cmd =
                    super::deps_upgrade::DepsUpgradeCommand::new(&self.project_root, detection);
                cmd.execute(ui)
            }
            Commands::Revert(args) => {
                let cmd = super::revert::RevertCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Commands::Bump(args) => {
                let cmd = super::bump::BumpCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Commands::ActionsUp => {
                let cmd = super::actions::ActionsUpCommand::new(&self.project_root);
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(std::path::PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), std::path::Path::new("/test"));
    }
}
