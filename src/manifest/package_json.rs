//! `package.json` reading and rewriting.
//!
//! Rewrites go through `serde_json` with order-preserving maps so a bumped
//! manifest keeps its field order and only the version changes.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{CairnError, Result};

/// Read the optional `version` field from a manifest.
///
/// Returns `Ok(None)` when the file does not exist or carries no string
/// `version` field; parse failures are errors.
pub fn read_version(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let value = load(path)?;
    Ok(value
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// Rewrite a manifest with a new `version`, preserving everything else.
pub fn write_version(path: &Path, version: &str) -> Result<()> {
    let mut value = load(path)?;

    let obj = value
        .as_object_mut()
        .ok_or_else(|| CairnError::ManifestParseError {
            path: path.to_path_buf(),
            message: "manifest root is not an object".to_string(),
        })?;
    obj.insert(
        "version".to_string(),
        Value::String(version.to_string()),
    );

    let mut rendered = serde_json::to_string_pretty(&value).map_err(|e| {
        CairnError::ManifestParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    rendered.push('\n');

    fs::write(path, rendered)?;
    Ok(())
}

fn load(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|_| CairnError::ManifestNotFound {
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|e| CairnError::ManifestParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
