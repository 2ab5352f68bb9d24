//! File-based detection helpers.

use std::path::Path;

/// Check if a file exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root.join(file).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.txt"), "").unwrap();

        assert!(file_exists(temp.path(), "test.txt"));
        assert!(!file_exists(temp.path(), "missing.txt"));
    }

    #[test]
    fn file_exists_checks_relative_to_root() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("apps")).unwrap();
        fs::write(temp.path().join("apps/marker"), "").unwrap();

        assert!(file_exists(temp.path(), "apps/marker"));
    }
}
