//! File Manager
//!
//! Ties the registry to a FileStore backend. Every operation runs the
//! physical effect first and the registry update second, never the
//! reverse, and the registry is validated before anything touches the
//! store: a store success is never followed by a registry rejection, so
//! the index and the backing files cannot drift apart on a single call.

use crate::registry::{FileRecord, FileRegistry, RegistryError, SortKey};
use crate::store::FileStore;

use super::types::{FileStats, ManagerError};

/// Orchestrates registry bookkeeping and physical file effects.
pub struct FileManager {
    registry: FileRegistry,
    store: Box<dyn FileStore>,
}

impl FileManager {
    pub fn new(store: Box<dyn FileStore>) -> Self {
        Self {
            registry: FileRegistry::new(),
            store,
        }
    }

    /// Read-only view of the registry, for listings and searches.
    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// Create an empty file in the store and track it at `position`.
    pub fn create_file(&mut self, name: &str, position: usize) -> Result<(), ManagerError> {
        if self.registry.contains(name) {
            return Err(RegistryError::DuplicateName(name.to_string()).into());
        }
        if position > self.registry.len() {
            return Err(RegistryError::InvalidPosition {
                position,
                len: self.registry.len(),
            }
            .into());
        }
        self.store
            .create(name)
            .map_err(|source| ManagerError::CreateFailed {
                name: name.to_string(),
                source,
            })?;
        // Cannot fail: duplicate and position were validated above.
        self.registry.insert_at(name, "", position)?;
        Ok(())
    }

    pub fn create_at_start(&mut self, name: &str) -> Result<(), ManagerError> {
        self.create_file(name, 0)
    }

    pub fn create_at_end(&mut self, name: &str) -> Result<(), ManagerError> {
        self.create_file(name, self.registry.len())
    }

    /// Read a tracked file from the store, sync the snapshot, and return
    /// the content. An empty file reads as a failure, matching the
    /// "empty or couldn't be read" treatment of the console original.
    pub fn read_file(&mut self, name: &str) -> Result<String, ManagerError> {
        if !self.registry.contains(name) {
            return Err(ManagerError::NotTracked(name.to_string()));
        }
        let content = self
            .store
            .read_all(name)
            .map_err(|e| ManagerError::ReadFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        if content.is_empty() {
            return Err(ManagerError::ReadFailed {
                name: name.to_string(),
                reason: "file is empty".to_string(),
            });
        }
        self.registry.update_content(name, &content)?;
        Ok(content)
    }

    /// Append a newline-terminated line to a tracked file, on disk and in
    /// the snapshot.
    pub fn append_content(&mut self, name: &str, text: &str) -> Result<(), ManagerError> {
        let current = match self.registry.get(name) {
            Some(record) => record.content.clone(),
            None => return Err(ManagerError::NotTracked(name.to_string())),
        };
        let line = format!("{}\n", text);
        self.store
            .append(name, &line)
            .map_err(|source| ManagerError::WriteFailed {
                name: name.to_string(),
                source,
            })?;
        self.registry.update_content(name, &format!("{}{}", current, line))?;
        Ok(())
    }

    /// Replace a tracked file's content, on disk and in the snapshot.
    pub fn overwrite_content(&mut self, name: &str, text: &str) -> Result<(), ManagerError> {
        if !self.registry.contains(name) {
            return Err(ManagerError::NotTracked(name.to_string()));
        }
        self.store
            .write_all(name, text)
            .map_err(|source| ManagerError::WriteFailed {
                name: name.to_string(),
                source,
            })?;
        self.registry.update_content(name, text)?;
        Ok(())
    }

    /// Delete the file at `position` from the store, then untrack it.
    /// Returns the deleted name. The registry entry survives a store
    /// failure.
    pub fn delete_at(&mut self, position: usize) -> Result<String, ManagerError> {
        let name = match self.registry.get_at(position) {
            Some(record) => record.name.clone(),
            None => {
                return Err(RegistryError::InvalidPosition {
                    position,
                    len: self.registry.len(),
                }
                .into())
            }
        };
        self.store
            .delete(&name)
            .map_err(|source| ManagerError::DeleteFailed {
                name: name.clone(),
                source,
            })?;
        self.registry.remove_at(position)?;
        Ok(name)
    }

    /// Delete a tracked file by name from the store, then untrack it.
    pub fn delete_by_name(&mut self, name: &str) -> Result<(), ManagerError> {
        if !self.registry.contains(name) {
            return Err(ManagerError::NotTracked(name.to_string()));
        }
        self.store
            .delete(name)
            .map_err(|source| ManagerError::DeleteFailed {
                name: name.to_string(),
                source,
            })?;
        self.registry.remove_by_name(name)?;
        Ok(())
    }

    /// Delete every tracked file from the store, then clear the registry
    /// unconditionally: the registry is authoritative for "managed"
    /// status, so individual store failures are collected and returned
    /// rather than aborting the clear.
    pub fn delete_all(&mut self) -> Vec<String> {
        let mut failed = Vec::new();
        for record in self.registry.records() {
            if self.store.delete(&record.name).is_err() {
                failed.push(record.name.clone());
            }
        }
        self.registry.clear();
        failed
    }

    /// Rename a tracked file in the store and the registry. Both checks
    /// run before the store is touched; a store failure leaves disk and
    /// registry exactly as they were.
    pub fn rename_file(&mut self, old_name: &str, new_name: &str) -> Result<(), ManagerError> {
        if !self.registry.contains(old_name) {
            return Err(ManagerError::NotTracked(old_name.to_string()));
        }
        if self.registry.contains(new_name) {
            return Err(RegistryError::DuplicateName(new_name.to_string()).into());
        }
        self.store
            .rename(old_name, new_name)
            .map_err(|source| ManagerError::RenameFailed {
                old: old_name.to_string(),
                new: new_name.to_string(),
                source,
            })?;
        self.registry.rename(old_name, new_name)?;
        Ok(())
    }

    /// Restamp a tracked file's metadata without touching content.
    pub fn touch(&mut self, name: &str) -> Result<(), ManagerError> {
        Ok(self.registry.touch(name)?)
    }

    /// Snapshot statistics of a tracked file.
    pub fn file_stats(&self, name: &str) -> Result<FileStats, ManagerError> {
        let record = self
            .registry
            .get(name)
            .ok_or_else(|| ManagerError::NotTracked(name.to_string()))?;
        Ok(FileStats {
            name: record.name.clone(),
            file_type: record.file_type,
            size: record.size,
            modified: record.modified,
            lines: record.line_count(),
        })
    }

    /// The in-memory snapshot of a tracked file's content.
    pub fn content_of(&self, name: &str) -> Option<&str> {
        self.registry.get(name).map(|r| r.content.as_str())
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&FileRecord> {
        self.registry.get(name)
    }

    /// Reorder the registry in place.
    pub fn sort(&mut self, key: SortKey) {
        self.registry.sort_by(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FileType;
    use crate::store::{MemoryStore, StoreError};

    /// Store that fails every call, for failure-path tests.
    struct FailingStore;

    impl FileStore for FailingStore {
        fn create(&self, name: &str) -> Result<(), StoreError> {
            Err(io_err(name, "create"))
        }
        fn read_all(&self, name: &str) -> Result<String, StoreError> {
            Err(io_err(name, "read"))
        }
        fn write_all(&self, name: &str, _content: &str) -> Result<(), StoreError> {
            Err(io_err(name, "write"))
        }
        fn append(&self, name: &str, _content: &str) -> Result<(), StoreError> {
            Err(io_err(name, "append"))
        }
        fn delete(&self, name: &str) -> Result<(), StoreError> {
            Err(io_err(name, "delete"))
        }
        fn rename(&self, old_name: &str, _new_name: &str) -> Result<(), StoreError> {
            Err(io_err(old_name, "rename"))
        }
    }

    fn io_err(name: &str, operation: &str) -> StoreError {
        StoreError::Io {
            name: name.to_string(),
            operation: operation.to_string(),
            message: "disk unavailable".to_string(),
        }
    }

    fn manager() -> FileManager {
        FileManager::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_create_tracks_and_creates() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        mgr.create_at_end("b.jpg").unwrap();
        mgr.create_file("x.txt", 1).unwrap();

        let order: Vec<_> = mgr.registry().records().iter().map(|r| &r.name).collect();
        assert_eq!(order, vec!["a.txt", "x.txt", "b.jpg"]);
        assert_eq!(mgr.registry().get("b.jpg").unwrap().file_type, FileType::Image);
    }

    #[test]
    fn test_create_duplicate_rejected_before_store() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        let err = mgr.create_at_end("a.txt").unwrap_err();
        assert_eq!(
            err,
            ManagerError::Registry(RegistryError::DuplicateName("a.txt".to_string()))
        );
        assert_eq!(mgr.registry().len(), 1);
    }

    #[test]
    fn test_create_invalid_position_on_empty() {
        let mut mgr = manager();
        let err = mgr.create_file("x.txt", 5).unwrap_err();
        assert_eq!(
            err,
            ManagerError::Registry(RegistryError::InvalidPosition { position: 5, len: 0 })
        );
        assert!(mgr.registry().is_empty());
    }

    #[test]
    fn test_create_store_failure_leaves_registry_untouched() {
        let mut mgr = FileManager::new(Box::new(FailingStore));
        let err = mgr.create_at_end("a.txt").unwrap_err();
        assert!(matches!(err, ManagerError::CreateFailed { .. }));
        assert!(mgr.registry().is_empty());
    }

    #[test]
    fn test_read_syncs_snapshot() {
        let store = MemoryStore::with_files(&[("a.txt", "from disk")]);
        let mut mgr = FileManager::new(Box::new(store));
        // Track it first; content starts out of sync with the store.
        mgr.registry.push_back("a.txt", "").unwrap();

        let content = mgr.read_file("a.txt").unwrap();
        assert_eq!(content, "from disk");
        let record = mgr.registry().get("a.txt").unwrap();
        assert_eq!(record.content, "from disk");
        assert_eq!(record.size, "from disk".len() as u64);
    }

    #[test]
    fn test_read_untracked_or_empty() {
        let store = MemoryStore::with_files(&[("empty.txt", "")]);
        let mut mgr = FileManager::new(Box::new(store));

        assert_eq!(
            mgr.read_file("nope.txt").unwrap_err(),
            ManagerError::NotTracked("nope.txt".to_string())
        );

        mgr.registry.push_back("empty.txt", "").unwrap();
        assert!(matches!(
            mgr.read_file("empty.txt").unwrap_err(),
            ManagerError::ReadFailed { .. }
        ));
    }

    #[test]
    fn test_append_keeps_memory_and_store_consistent() {
        let mut mgr = manager();
        mgr.create_at_end("log.txt").unwrap();
        mgr.append_content("log.txt", "first").unwrap();
        mgr.append_content("log.txt", "second").unwrap();

        assert_eq!(mgr.content_of("log.txt"), Some("first\nsecond\n"));
        assert_eq!(mgr.registry().get("log.txt").unwrap().size, 13);
    }

    #[test]
    fn test_overwrite() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        mgr.append_content("a.txt", "old").unwrap();
        mgr.overwrite_content("a.txt", "new").unwrap();
        assert_eq!(mgr.content_of("a.txt"), Some("new"));
    }

    #[test]
    fn test_write_untracked_rejected() {
        let mut mgr = manager();
        assert_eq!(
            mgr.append_content("nope.txt", "x").unwrap_err(),
            ManagerError::NotTracked("nope.txt".to_string())
        );
        assert_eq!(
            mgr.overwrite_content("nope.txt", "x").unwrap_err(),
            ManagerError::NotTracked("nope.txt".to_string())
        );
    }

    #[test]
    fn test_delete_at_and_by_name() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        mgr.create_at_end("b.txt").unwrap();

        assert_eq!(mgr.delete_at(0).unwrap(), "a.txt");
        mgr.delete_by_name("b.txt").unwrap();
        assert!(mgr.registry().is_empty());

        assert!(matches!(
            mgr.delete_at(3).unwrap_err(),
            ManagerError::Registry(RegistryError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_delete_store_failure_keeps_entry() {
        let mut mgr = FileManager::new(Box::new(MemoryStore::new()));
        mgr.create_at_end("a.txt").unwrap();
        // Swap in a store that refuses the delete.
        mgr.store = Box::new(FailingStore);

        assert!(matches!(
            mgr.delete_by_name("a.txt").unwrap_err(),
            ManagerError::DeleteFailed { .. }
        ));
        assert!(mgr.registry().contains("a.txt"));
    }

    #[test]
    fn test_delete_all_collects_failures_but_clears() {
        let mut mgr = FileManager::new(Box::new(MemoryStore::new()));
        mgr.create_at_end("a.txt").unwrap();
        mgr.create_at_end("b.txt").unwrap();
        mgr.store = Box::new(FailingStore);

        let failed = mgr.delete_all();
        assert_eq!(failed, vec!["a.txt", "b.txt"]);
        assert!(mgr.registry().is_empty());
    }

    #[test]
    fn test_delete_all_clean() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        mgr.create_at_end("b.txt").unwrap();
        assert!(mgr.delete_all().is_empty());
        assert!(mgr.registry().is_empty());
    }

    #[test]
    fn test_rename_scenario() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        mgr.create_at_end("b.jpg").unwrap();

        // Renaming onto a tracked name fails and alters neither record.
        let err = mgr.rename_file("a.txt", "b.jpg").unwrap_err();
        assert_eq!(
            err,
            ManagerError::Registry(RegistryError::DuplicateName("b.jpg".to_string()))
        );
        assert!(mgr.registry().contains("a.txt"));
        assert!(mgr.registry().contains("b.jpg"));

        mgr.rename_file("a.txt", "c.mp3").unwrap();
        let record = mgr.registry().get("c.mp3").unwrap();
        assert_eq!(record.file_type, FileType::Audio);
        assert_eq!(mgr.registry().position_of("c.mp3"), Some(0));
    }

    #[test]
    fn test_rename_store_failure_leaves_registry() {
        let mut mgr = FileManager::new(Box::new(MemoryStore::new()));
        mgr.create_at_end("a.txt").unwrap();
        mgr.store = Box::new(FailingStore);

        assert!(matches!(
            mgr.rename_file("a.txt", "b.txt").unwrap_err(),
            ManagerError::RenameFailed { .. }
        ));
        assert!(mgr.registry().contains("a.txt"));
        assert!(!mgr.registry().contains("b.txt"));
    }

    #[test]
    fn test_file_stats() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        mgr.append_content("a.txt", "one").unwrap();
        mgr.append_content("a.txt", "two").unwrap();

        let stats = mgr.file_stats("a.txt").unwrap();
        assert_eq!(stats.name, "a.txt");
        assert_eq!(stats.file_type, FileType::Document);
        assert_eq!(stats.size, 8);
        assert_eq!(stats.lines, 2);

        assert_eq!(
            mgr.file_stats("nope.txt").unwrap_err(),
            ManagerError::NotTracked("nope.txt".to_string())
        );
    }

    #[test]
    fn test_touch_restamps() {
        let mut mgr = manager();
        mgr.create_at_end("a.txt").unwrap();
        let before = mgr.registry().get("a.txt").unwrap().modified;
        std::thread::sleep(std::time::Duration::from_millis(5));
        mgr.touch("a.txt").unwrap();
        assert!(mgr.registry().get("a.txt").unwrap().modified > before);
    }
}
