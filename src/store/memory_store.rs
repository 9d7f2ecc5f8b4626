//! In-Memory Store
//!
//! A FileStore keeping content in a map. Used by tests and by the
//! sandboxed CLI mode, where no host file should be touched.

use std::collections::HashMap;
use std::sync::RwLock;

use super::types::{FileStore, StoreError};

/// Pure in-memory FileStore.
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create with initial files.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut data = store.data.write().expect("store lock poisoned");
            for (name, content) in files {
                data.insert(name.to_string(), content.to_string());
            }
        }
        store
    }

    /// Whether a file is present.
    pub fn exists(&self, name: &str) -> bool {
        self.data
            .read()
            .expect("store lock poisoned")
            .contains_key(name)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for MemoryStore {
    fn create(&self, name: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().expect("store lock poisoned");
        if data.contains_key(name) {
            return Err(StoreError::AlreadyExists {
                name: name.to_string(),
                operation: "create".to_string(),
            });
        }
        data.insert(name.to_string(), String::new());
        Ok(())
    }

    fn read_all(&self, name: &str) -> Result<String, StoreError> {
        let data = self.data.read().expect("store lock poisoned");
        data.get(name).cloned().ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
            operation: "read".to_string(),
        })
    }

    fn write_all(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().expect("store lock poisoned");
        data.insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn append(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().expect("store lock poisoned");
        data.entry(name.to_string())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().expect("store lock poisoned");
        data.remove(name).map(|_| ()).ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
            operation: "delete".to_string(),
        })
    }

    fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().expect("store lock poisoned");
        if data.contains_key(new_name) {
            return Err(StoreError::AlreadyExists {
                name: new_name.to_string(),
                operation: "rename".to_string(),
            });
        }
        match data.remove(old_name) {
            Some(content) => {
                data.insert(new_name.to_string(), content);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                name: old_name.to_string(),
                operation: "rename".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_read() {
        let store = MemoryStore::new();
        store.create("a.txt").unwrap();
        assert!(store.exists("a.txt"));
        assert_eq!(store.read_all("a.txt").unwrap(), "");
        assert!(matches!(
            store.create("a.txt").unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));
    }

    #[test]
    fn test_write_append_delete() {
        let store = MemoryStore::new();
        store.write_all("a.txt", "hello").unwrap();
        store.append("a.txt", " world").unwrap();
        assert_eq!(store.read_all("a.txt").unwrap(), "hello world");

        store.delete("a.txt").unwrap();
        assert!(!store.exists("a.txt"));
        assert!(matches!(
            store.delete("a.txt").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn test_rename() {
        let store = MemoryStore::with_files(&[("a.txt", "data"), ("b.txt", "other")]);
        assert!(matches!(
            store.rename("a.txt", "b.txt").unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));
        store.rename("a.txt", "c.txt").unwrap();
        assert_eq!(store.read_all("c.txt").unwrap(), "data");
        assert!(!store.exists("a.txt"));
    }
}
