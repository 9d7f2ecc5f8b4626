//! File Store Types
//!
//! The capability trait for physical file effects, plus its error type.

use thiserror::Error;

/// Store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("ENOENT: no such file, {operation} '{name}'")]
    NotFound { name: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{name}'")]
    AlreadyExists { name: String, operation: String },

    #[error("EINVAL: invalid file name, {operation} '{name}'")]
    InvalidName { name: String, operation: String },

    #[error("EIO: {operation} '{name}' failed: {message}")]
    Io {
        name: String,
        operation: String,
        message: String,
    },
}

/// Capability performing the actual filesystem effects over a flat
/// namespace of file names. Every call is synchronous and atomic from the
/// caller's perspective: it either fully succeeds or reports one typed
/// error, with no retries.
pub trait FileStore: Send + Sync {
    /// Create an empty file. Fails if the name already exists.
    fn create(&self, name: &str) -> Result<(), StoreError>;

    /// Read the entire content of a file.
    fn read_all(&self, name: &str) -> Result<String, StoreError>;

    /// Replace the entire content of a file, creating it if missing.
    fn write_all(&self, name: &str, content: &str) -> Result<(), StoreError>;

    /// Append to a file, creating it if missing.
    fn append(&self, name: &str, content: &str) -> Result<(), StoreError>;

    /// Remove a file.
    fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Rename a file. Fails if the target name already exists.
    fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError>;
}
