//! Disk Store
//!
//! FileStore backed by one flat directory of the host filesystem.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use super::types::{FileStore, StoreError};

/// FileStore over a single directory of the real filesystem. Names are a
/// flat namespace: separators and parent references are rejected before
/// any path is built, so every effect stays inside the root.
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str, operation: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
                operation: operation.to_string(),
            });
        }
        Ok(self.root.join(name))
    }
}

fn map_io(name: &str, operation: &str, err: std::io::Error) -> StoreError {
    match err.kind() {
        std::io::ErrorKind::NotFound => StoreError::NotFound {
            name: name.to_string(),
            operation: operation.to_string(),
        },
        std::io::ErrorKind::AlreadyExists => StoreError::AlreadyExists {
            name: name.to_string(),
            operation: operation.to_string(),
        },
        _ => StoreError::Io {
            name: name.to_string(),
            operation: operation.to_string(),
            message: err.to_string(),
        },
    }
}

impl FileStore for DiskStore {
    fn create(&self, name: &str) -> Result<(), StoreError> {
        let path = self.resolve(name, "create")?;
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map(|_| ())
            .map_err(|e| map_io(name, "create", e))
    }

    fn read_all(&self, name: &str) -> Result<String, StoreError> {
        let path = self.resolve(name, "read")?;
        fs::read_to_string(&path).map_err(|e| map_io(name, "read", e))
    }

    fn write_all(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = self.resolve(name, "write")?;
        fs::write(&path, content).map_err(|e| map_io(name, "write", e))
    }

    fn append(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = self.resolve(name, "append")?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| map_io(name, "append", e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io(name, "append", e))
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.resolve(name, "delete")?;
        fs::remove_file(&path).map_err(|e| map_io(name, "delete", e))
    }

    fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        let old_path = self.resolve(old_name, "rename")?;
        let new_path = self.resolve(new_name, "rename")?;
        // std::fs::rename silently replaces an existing target on Unix.
        if new_path.exists() {
            return Err(StoreError::AlreadyExists {
                name: new_name.to_string(),
                operation: "rename".to_string(),
            });
        }
        fs::rename(&old_path, &new_path).map_err(|e| map_io(old_name, "rename", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_read_write_delete() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path());

        store.create("a.txt").unwrap();
        assert_eq!(store.read_all("a.txt").unwrap(), "");

        store.write_all("a.txt", "hello").unwrap();
        assert_eq!(store.read_all("a.txt").unwrap(), "hello");

        store.append("a.txt", " world").unwrap();
        assert_eq!(store.read_all("a.txt").unwrap(), "hello world");

        store.delete("a.txt").unwrap();
        assert!(matches!(
            store.read_all("a.txt").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn test_create_existing_fails() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path());

        store.create("a.txt").unwrap();
        assert!(matches!(
            store.create("a.txt").unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));
    }

    #[test]
    fn test_rename() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path());

        store.write_all("old.txt", "data").unwrap();
        store.rename("old.txt", "new.txt").unwrap();
        assert_eq!(store.read_all("new.txt").unwrap(), "data");
        assert!(matches!(
            store.read_all("old.txt").unwrap_err(),
            StoreError::NotFound { .. }
        ));

        // Renaming onto an existing file is refused, not a silent replace.
        store.write_all("other.txt", "x").unwrap();
        assert!(matches!(
            store.rename("new.txt", "other.txt").unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));
        assert_eq!(store.read_all("other.txt").unwrap(), "x");
    }

    #[test]
    fn test_rejects_path_escapes() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path());

        for name in ["", ".", "..", "a/b.txt", "..\\evil.txt"] {
            assert!(matches!(
                store.create(name).unwrap_err(),
                StoreError::InvalidName { .. }
            ));
        }
    }

    #[test]
    fn test_delete_missing() {
        let dir = tempdir().unwrap();
        let store = DiskStore::new(dir.path());
        assert!(matches!(
            store.delete("nope.txt").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }
}
