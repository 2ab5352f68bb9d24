//! Workspace pattern expansion.
//!
//! Expands pnpm-workspace style package patterns (`packages/*`, `apps/**`,
//! literal directories) into concrete `package.json` paths. Matching is
//! done in-tree with plain directory walking; the supported pattern forms
//! are the ones workspace files actually use.

use std::fs;
use std::path::{Path, PathBuf};

/// Expand package patterns beneath a root into existing `package.json`
/// paths.
///
/// Supported forms: a literal directory, `dir/*` (direct children), and
/// `dir/**` (all nested directories). A trailing `/package.json` segment
/// is tolerated and stripped first. Negated patterns (`!...`) select
/// nothing. `node_modules` and hidden directories are never descended
/// into. The result is sorted and deduplicated.
pub fn expand_package_globs(root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for pattern in patterns {
        if pattern.starts_with('!') {
            continue;
        }

        let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
        let pattern = pattern.strip_suffix("/package.json").unwrap_or(pattern);

        if let Some(prefix) = pattern.strip_suffix("/**") {
            collect_recursive(&root.join(prefix), &mut found);
        } else if let Some(prefix) = pattern.strip_suffix("/*") {
            collect_children(&root.join(prefix), &mut found);
        } else {
            push_manifest(&root.join(pattern), &mut found);
        }
    }

    found.sort();
    found.dedup();
    found
}

/// Record `dir/package.json` if it exists.
fn push_manifest(dir: &Path, found: &mut Vec<PathBuf>) {
    let manifest = dir.join("package.json");
    if manifest.is_file() {
        found.push(manifest);
    }
}

/// Record manifests of the direct child directories.
fn collect_children(base: &Path, found: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(base) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() && !is_skipped(&path) {
            push_manifest(&path, found);
        }
    }
}

/// Record manifests of the base directory and every nested directory.
fn collect_recursive(base: &Path, found: &mut Vec<PathBuf>) {
    if !base.is_dir() {
        return;
    }

    push_manifest(base, found);

    let Ok(entries) = fs::read_dir(base) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() && !is_skipped(&path) {
            collect_recursive(&path, found);
        }
    }
}

fn is_skipped(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n == "node_modules" || n.starts_with('.'))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package(temp: &TempDir, dir: &str) {
        let path = temp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("package.json"), "{}").unwrap();
    }

    #[test]
    fn star_pattern_matches_direct_children() {
        let temp = TempDir::new().unwrap();
        package(&temp, "apps/web");
        package(&temp, "apps/api");
        package(&temp, "libs/ui");

        let found = expand_package_globs(temp.path(), &["apps/*".to_string()]);

        assert_eq!(
            found,
            vec![
                temp.path().join("apps/api/package.json"),
                temp.path().join("apps/web/package.json"),
            ]
        );
    }

    #[test]
    fn multiple_patterns_accumulate() {
        let temp = TempDir::new().unwrap();
        package(&temp, "apps/web");
        package(&temp, "libs/ui");

        let found = expand_package_globs(
            temp.path(),
            &["apps/*".to_string(), "libs/*".to_string()],
        );

        assert_eq!(found.len(), 2);
        assert!(found.contains(&temp.path().join("apps/web/package.json")));
        assert!(found.contains(&temp.path().join("libs/ui/package.json")));
    }

    #[test]
    fn children_without_manifest_are_ignored() {
        let temp = TempDir::new().unwrap();
        package(&temp, "packages/a");
        fs::create_dir_all(temp.path().join("packages/no-manifest")).unwrap();

        let found = expand_package_globs(temp.path(), &["packages/*".to_string()]);

        assert_eq!(found, vec![temp.path().join("packages/a/package.json")]);
    }

    #[test]
    fn double_star_recurses() {
        let temp = TempDir::new().unwrap();
        package(&temp, "packages/group");
        package(&temp, "packages/group/deep");

        let found = expand_package_globs(temp.path(), &["packages/**".to_string()]);

        assert_eq!(found.len(), 2);
        assert!(found.contains(&temp.path().join("packages/group/deep/package.json")));
    }

    #[test]
    fn literal_directory_pattern() {
        let temp = TempDir::new().unwrap();
        package(&temp, "docs");

        let found = expand_package_globs(temp.path(), &["docs".to_string()]);

        assert_eq!(found, vec![temp.path().join("docs/package.json")]);
    }

    #[test]
    fn trailing_manifest_segment_is_tolerated() {
        let temp = TempDir::new().unwrap();
        package(&temp, "packages/a");

        let found =
            expand_package_globs(temp.path(), &["./packages/*/package.json".to_string()]);

        assert_eq!(found, vec![temp.path().join("packages/a/package.json")]);
    }

    #[test]
    fn negated_patterns_select_nothing() {
        let temp = TempDir::new().unwrap();
        package(&temp, "packages/a");

        let found = expand_package_globs(temp.path(), &["!packages/a".to_string()]);

        assert!(found.is_empty());
    }

    #[test]
    fn node_modules_is_never_descended() {
        let temp = TempDir::new().unwrap();
        package(&temp, "packages/a");
        package(&temp, "packages/node_modules/dep");

        let star = expand_package_globs(temp.path(), &["packages/*".to_string()]);
        let recursive = expand_package_globs(temp.path(), &["packages/**".to_string()]);

        assert_eq!(star, vec![temp.path().join("packages/a/package.json")]);
        assert!(!recursive
            .iter()
            .any(|p| p.to_string_lossy().contains("node_modules")));
    }

    #[test]
    fn duplicate_matches_are_deduplicated() {
        let temp = TempDir::new().unwrap();
        package(&temp, "packages/a");

        let found = expand_package_globs(
            temp.path(),
            &["packages/*".to_string(), "packages/a".to_string()],
        );

        assert_eq!(found.len(), 1);
    }

    #[test]
    fn missing_base_directory_matches_nothing() {
        let temp = TempDir::new().unwrap();

        let found = expand_package_globs(temp.path(), &["missing/*".to_string()]);

        assert!(found.is_empty());
    }
}
