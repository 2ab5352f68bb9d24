//! Manifest version bumping.
//!
//! The engine rewrites a list of `package.json` files to their next
//! version and optionally performs its own follow-ups (confirmation,
//! commit, tag, push). The `bump` subcommand always runs it with every
//! follow-up disabled; the tool's own `commit`/`push` commands cover
//! those separately.

pub mod engine;
pub mod level;

pub use engine::{run_bump, BumpOptions, BumpOutcome, BumpedManifest};
pub use level::BumpLevel;
