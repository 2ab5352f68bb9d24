//! Shell command execution.

pub mod command;

pub use command::{
    execute, execute_check, execute_quiet, is_ci, run, shell_quote, CommandOptions, CommandResult,
};
