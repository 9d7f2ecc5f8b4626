//! File Registry
//!
//! The ordered, in-memory index of tracked files. Insertion order is the
//! user-visible order; only explicit sort calls reorder it. Every record is
//! created, mutated, and removed through the registry, which validates
//! bounds and name uniqueness before touching anything: a rejected
//! operation leaves the registry exactly as it was.

use super::file_type::classify;
use super::types::{FileRecord, FileType, RegistryError, SortKey};

/// Ordered collection of file records with unique names.
#[derive(Debug, Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Current position of a record, if tracked.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn get_at(&self, position: usize) -> Option<&FileRecord> {
        self.records.get(position)
    }

    /// All records in current registry order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut FileRecord> {
        self.records.iter_mut().find(|r| r.name == name)
    }

    /// Insert a new record at `position`, shifting later records one slot
    /// right. `position == len` appends. The record is classified and
    /// stamped on construction.
    pub fn insert_at(
        &mut self,
        name: &str,
        content: &str,
        position: usize,
    ) -> Result<(), RegistryError> {
        if self.contains(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        if position > self.records.len() {
            return Err(RegistryError::InvalidPosition {
                position,
                len: self.records.len(),
            });
        }
        self.records.insert(
            position,
            FileRecord::new(name.to_string(), content.to_string()),
        );
        Ok(())
    }

    /// Insert at the front of the order.
    pub fn push_front(&mut self, name: &str, content: &str) -> Result<(), RegistryError> {
        self.insert_at(name, content, 0)
    }

    /// Insert at the end of the order.
    pub fn push_back(&mut self, name: &str, content: &str) -> Result<(), RegistryError> {
        self.insert_at(name, content, self.records.len())
    }

    /// Detach and return the record at `position`.
    pub fn remove_at(&mut self, position: usize) -> Result<FileRecord, RegistryError> {
        if position >= self.records.len() {
            return Err(RegistryError::InvalidPosition {
                position,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(position))
    }

    /// Detach and return the record with the given name.
    pub fn remove_by_name(&mut self, name: &str) -> Result<FileRecord, RegistryError> {
        let position = self
            .position_of(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        Ok(self.records.remove(position))
    }

    /// Replace a record's content, recomputing size and modification time.
    pub fn update_content(&mut self, name: &str, new_content: &str) -> Result<(), RegistryError> {
        let record = self
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        record.content = new_content.to_string();
        record.refresh_stats();
        Ok(())
    }

    /// Restamp a record's metadata without changing its content.
    pub fn touch(&mut self, name: &str) -> Result<(), RegistryError> {
        let record = self
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        record.refresh_stats();
        Ok(())
    }

    /// Rename a record, re-deriving its category. Its position in the
    /// order is unchanged, and its content and timestamps are untouched.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), RegistryError> {
        let position = self
            .position_of(old_name)
            .ok_or_else(|| RegistryError::NotFound(old_name.to_string()))?;
        if self.contains(new_name) {
            return Err(RegistryError::DuplicateName(new_name.to_string()));
        }
        let record = &mut self.records[position];
        record.name = new_name.to_string();
        record.file_type = classify(new_name);
        Ok(())
    }

    /// Sort the registry in place, ascending. The sort is stable: records
    /// with equal keys keep their prior relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.records.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Size => self.records.sort_by(|a, b| a.size.cmp(&b.size)),
            SortKey::Modified => self.records.sort_by(|a, b| a.modified.cmp(&b.modified)),
        }
    }

    /// Records whose name starts with `prefix`, in registry order. An
    /// empty prefix matches everything.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&FileRecord> {
        self.records
            .iter()
            .filter(|r| r.name.starts_with(prefix))
            .collect()
    }

    /// Records whose content contains `substring`, in registry order.
    pub fn search_by_content(&self, substring: &str) -> Vec<&FileRecord> {
        self.records
            .iter()
            .filter(|r| r.content.contains(substring))
            .collect()
    }

    /// Records of exactly the given category, in registry order.
    pub fn search_by_type(&self, file_type: FileType) -> Vec<&FileRecord> {
        self.records
            .iter()
            .filter(|r| r.file_type == file_type)
            .collect()
    }

    /// Records with `min <= size <= max`, in registry order. A range with
    /// `min > max` is a malformed query and is rejected, so the caller can
    /// tell it apart from a well-formed range that matches nothing.
    pub fn search_by_size_range(
        &self,
        min: u64,
        max: u64,
    ) -> Result<Vec<&FileRecord>, RegistryError> {
        if min > max {
            return Err(RegistryError::InvalidRange { min, max });
        }
        Ok(self
            .records
            .iter()
            .filter(|r| r.size >= min && r.size <= max)
            .collect())
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
