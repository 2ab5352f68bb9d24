//! Package manifest and workspace file access.

pub mod globs;
pub mod package_json;
pub mod pnpm_workspace;

pub use globs::expand_package_globs;
pub use package_json::{read_version, write_version};
pub use pnpm_workspace::PnpmWorkspace;
