//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Workspace detection runs once in
//! the dispatcher; handlers receive the result read-only.

pub mod actions;
pub mod bump;
pub mod commit;
pub mod completions;
pub mod deps_upgrade;
pub mod dispatcher;
pub mod publish;
pub mod push;
pub mod release;
pub mod revert;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::ui::UserInterface;

/// Show a forwarded tool's captured output, verbose mode only.
pub(crate) fn show_output(ui: &mut dyn UserInterface, result: &crate::shell::CommandResult) {
    if ui.output_mode().shows_command_output() && !result.stdout.trim().is_empty() {
        ui.message(result.stdout.trim_end());
    }
}
