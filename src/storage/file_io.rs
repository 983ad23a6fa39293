//! File I/O utilities with atomic writes
//!
//! Record files are replaced as a whole: a run either leaves the previous
//! version or the complete new one, never a truncated mix.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::BackupError;

/// Serialize a value as a block-style YAML document
pub fn to_yaml_string<T: Serialize>(data: &T) -> Result<String, BackupError> {
    serde_yaml::to_string(data)
        .map_err(|e| BackupError::Yaml(format!("Failed to serialize data: {}", e)))
}

/// Read YAML from a file, returning an error if the file doesn't exist
pub fn read_yaml<T, P>(path: P) -> Result<T, BackupError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(BackupError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| BackupError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_yaml::from_reader(reader)
        .map_err(|e| BackupError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write YAML to a file atomically (write to temp, then rename)
///
/// Any existing file at `path` is replaced. The parent directory must
/// already exist.
pub fn write_yaml_atomic<T, P>(path: P, data: &T) -> Result<(), BackupError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = to_yaml_string(data)?;

    // Temp file goes in the target's directory under a short name of its own
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        BackupError::Storage(format!(
            "Failed to create temp file in {}: {}",
            dir.display(),
            e
        ))
    })?;

    temp.write_all(contents.as_bytes())
        .map_err(|e| BackupError::Storage(format!("Failed to write data: {}", e)))?;

    temp.flush()
        .map_err(|e| BackupError::Storage(format!("Failed to flush data: {}", e)))?;

    temp.as_file()
        .sync_all()
        .map_err(|e| BackupError::Storage(format!("Failed to sync data: {}", e)))?;

    // On failure the temp file is dropped with the error, which removes it
    temp.persist(path).map_err(|e| {
        BackupError::Storage(format!(
            "Failed to replace {}: {}",
            path.display(),
            e.error
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        tags: Vec<String>,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.yaml");

        write_yaml_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: TestData = read_yaml(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_block_style_output() {
        let yaml = to_yaml_string(&sample()).unwrap();
        assert_eq!(yaml, "name: test\ntags:\n- a\n- b\n");
    }

    #[test]
    fn test_atomic_write_leaves_only_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("example.com.yaml");

        write_yaml_atomic(&path, &sample()).unwrap();
        write_yaml_atomic(&path, &sample()).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("example.com.yaml")]);
    }

    #[test]
    fn test_write_name_at_filesystem_limit() {
        let temp_dir = TempDir::new().unwrap();
        // 250 + ".yaml" is the longest name most filesystems accept
        let path = temp_dir.path().join(format!("{}.yaml", "a".repeat(250)));

        write_yaml_atomic(&path, &sample()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name: test\ntags:\n- a\n- b\n");
    }

    #[test]
    fn test_write_replaces_longer_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.yaml");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_yaml_atomic(&path, &sample()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name: test\ntags:\n- a\n- b\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("test.yaml");

        let err = write_yaml_atomic(&path, &sample()).unwrap_err();
        assert!(matches!(err, BackupError::Storage(_)));
    }

    #[test]
    fn test_read_yaml_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.yaml");

        assert!(read_yaml::<TestData, _>(&path).is_err());
    }
}
