//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//! - All errors are fatal to the current invocation; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// A required manifest file was not found.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a package manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Failed to parse a workspace definition file.
    #[error("Failed to parse workspace file at {path}: {message}")]
    WorkspaceParseError { path: PathBuf, message: String },

    /// No release version could be resolved from the manifest or git tags.
    #[error("No version to release: add a version field to package.json or tag the repository")]
    VersionNotResolved,

    /// A manifest carries a version that is not valid semver.
    #[error("Invalid version '{version}' in {path}: {message}")]
    InvalidVersion {
        path: PathBuf,
        version: String,
        message: String,
    },

    /// The detected package manager does not support the requested command.
    #[error("'{command}' is not supported with {manager}: {message}")]
    UnsupportedManager {
        manager: String,
        command: String,
        message: String,
    },

    /// The repository's remote is not hosted on GitHub.
    #[error("Release creation supports only GitHub repositories")]
    NonGitHubRemote,

    /// A required tool is missing and will not be auto-installed.
    #[error("Missing requirement '{requirement}': {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// An external command failed.
    #[error("Command failed with exit code {code:?}: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;
