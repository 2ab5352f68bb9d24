//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every subcommand keeps the
//! short alias it has always shipped with, so `cairn cmt`, `cairn ps`,
//! and friends keep working.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::bump::BumpLevel;

/// Cairn - Release workflow automation.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stage all changes and create a commit
    #[command(visible_alias = "cmt")]
    Commit(CommitArgs),

    /// Push the current branch to origin
    #[command(visible_alias = "ps")]
    Push,

    /// Publish the package, or every workspace package
    #[command(visible_alias = "pub")]
    Publish,

    /// Create a GitHub release for the current version
    #[command(visible_alias = "rel")]
    Release,

    /// Upgrade dependencies to their latest versions and reinstall
    #[command(name = "deps-upgrade", visible_alias = "up")]
    DepsUpgrade,

    /// Undo the latest commit
    #[command(visible_alias = "rvt")]
    Revert(RevertArgs),

    /// Bump manifest versions across the workspace
    #[command(visible_alias = "bmp")]
    Bump(BumpArgs),

    /// Update GitHub Actions dependencies via actions-up
    #[command(name = "actions-up", visible_alias = "act")]
    ActionsUp,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CommitArgs {
    /// Commit message
    pub message: String,
}

/// Arguments for the `revert` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RevertArgs {
    /// Reset mode: the literal "hard" discards the commit's changes,
    /// anything else keeps them staged
    pub target: Option<String>,
}

/// Arguments for the `bump` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BumpArgs {
    /// Version component to increment
    #[arg(value_enum)]
    pub level: BumpLevel,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
