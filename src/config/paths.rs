//! Path management for foreman-backup
//!
//! Resolves where each exported object lands inside the backup root.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   <resource_type>/<sanitized-name>.yaml
//! ```

use std::path::{Path, PathBuf};

use crate::error::BackupError;

/// Extension of every exported record file
pub const RECORD_EXTENSION: &str = "yaml";

/// Turn an object name into a filename stem
///
/// Every `/` becomes `_`. Nothing else is escaped.
pub fn sanitize_file_stem(name: &str) -> String {
    name.replace('/', "_")
}

/// Manages all paths below one backup root
#[derive(Debug, Clone)]
pub struct BackupPaths {
    /// Root directory of the backup tree
    root: PathBuf,
}

impl BackupPaths {
    /// Create BackupPaths for the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the backup root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding all objects of one resource type
    pub fn resource_dir(&self, resource_type: &str) -> PathBuf {
        self.root.join(resource_type)
    }

    /// File an object named `name` is written to
    pub fn record_file(&self, resource_type: &str, name: &str) -> PathBuf {
        self.resource_dir(resource_type)
            .join(format!("{}.{}", sanitize_file_stem(name), RECORD_EXTENSION))
    }

    /// Ensure the directory of one resource type exists
    ///
    /// Missing parents are created too; an existing directory is fine.
    pub fn ensure_resource_dir(&self, resource_type: &str) -> Result<PathBuf, BackupError> {
        let dir = self.resource_dir(resource_type);
        std::fs::create_dir_all(&dir).map_err(|e| {
            BackupError::Io(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_replaces_every_slash() {
        assert_eq!(sanitize_file_stem("eth0/bond0"), "eth0_bond0");
        assert_eq!(sanitize_file_stem("/a//b/"), "_a__b_");
        assert_eq!(sanitize_file_stem("plain"), "plain");
    }

    #[test]
    fn test_sanitize_leaves_other_characters() {
        assert_eq!(sanitize_file_stem("Kickstart: default"), "Kickstart: default");
        assert_eq!(sanitize_file_stem(r"a\b"), r"a\b");
    }

    #[test]
    fn test_record_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BackupPaths::new(temp_dir.path());

        assert_eq!(
            paths.record_file("domains", "example.com"),
            temp_dir.path().join("domains").join("example.com.yaml")
        );
        assert_eq!(
            paths.record_file("subnets", "10.0.0.0/24"),
            temp_dir.path().join("subnets").join("10.0.0.0_24.yaml")
        );
    }

    #[test]
    fn test_ensure_resource_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BackupPaths::new(temp_dir.path().join("nested").join("root"));

        let dir = paths.ensure_resource_dir("hosts").unwrap();
        assert!(dir.is_dir());

        std::fs::write(dir.join("keep.yaml"), "name: keep\n").unwrap();
        paths.ensure_resource_dir("hosts").unwrap();
        assert!(dir.join("keep.yaml").exists());
    }

    #[test]
    fn test_ensure_resource_dir_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("hosts"), "not a directory").unwrap();
        let paths = BackupPaths::new(temp_dir.path());

        let err = paths.ensure_resource_dir("hosts").unwrap_err();
        assert!(matches!(err, BackupError::Io(_)));
    }
}
