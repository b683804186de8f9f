//! Schema file discovery
//!
//! Hooks receive the candidate file list from the commit-time runner and
//! filter it down to schema files by name. When invoked without files we
//! fall back to walking the current directory.

use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filename pattern for dbt schema files (case-insensitive)
const SCHEMA_FILE_PATTERN: &str = r"(?i)^schema\.ya?ml$";

/// Check whether a path names a schema file (`schema.yml` / `schema.yaml`)
pub fn is_schema_file(path: &Path) -> bool {
    let pattern = Regex::new(SCHEMA_FILE_PATTERN).unwrap();

    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| pattern.is_match(name))
        .unwrap_or(false)
}

/// Filter a runner-supplied file list down to existing schema files
pub fn filter_schema_files(files: &[PathBuf]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|p| p.is_file() && is_schema_file(p))
        .cloned()
        .collect()
}

/// Recursively discover schema files under a root directory
pub fn discover_schema_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_schema_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_filenames_match() {
        assert!(is_schema_file(Path::new("models/schema.yml")));
        assert!(is_schema_file(Path::new("schema.yaml")));
        assert!(is_schema_file(Path::new("models/staging/SCHEMA.YML")));
    }

    #[test]
    fn other_filenames_do_not_match() {
        assert!(!is_schema_file(Path::new("models/users.sql")));
        assert!(!is_schema_file(Path::new("my_schema.yml")));
        assert!(!is_schema_file(Path::new("schema.yml.bak")));
    }

    #[test]
    fn discovery_finds_nested_schema_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("models/staging");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(dir.path().join("schema.yml"), "version: 2\n").unwrap();
        std::fs::write(nested.join("schema.yaml"), "version: 2\n").unwrap();
        std::fs::write(nested.join("users.sql"), "select 1\n").unwrap();

        let found = discover_schema_files(dir.path());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| is_schema_file(p)));
    }

    #[test]
    fn filter_keeps_only_existing_schema_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("schema.yml");
        std::fs::write(&present, "version: 2\n").unwrap();

        let candidates = vec![
            present.clone(),
            dir.path().join("missing/schema.yml"),
            dir.path().join("model.sql"),
        ];

        assert_eq!(filter_schema_files(&candidates), vec![present]);
    }
}
