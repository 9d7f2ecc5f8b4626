//! Manager Types

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::registry::{FileType, RegistryError};
use crate::store::StoreError;

/// Manager errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("file '{0}' is not tracked by the registry")]
    NotTracked(String),

    #[error("could not create '{name}': {source}")]
    CreateFailed { name: String, source: StoreError },

    #[error("could not read '{name}': {reason}")]
    ReadFailed { name: String, reason: String },

    #[error("could not write '{name}': {source}")]
    WriteFailed { name: String, source: StoreError },

    #[error("could not delete '{name}': {source}")]
    DeleteFailed { name: String, source: StoreError },

    #[error("could not rename '{old}' to '{new}': {source}")]
    RenameFailed {
        old: String,
        new: String,
        source: StoreError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Snapshot statistics for one tracked file.
#[derive(Debug, Clone, Serialize)]
pub struct FileStats {
    pub name: String,
    pub file_type: FileType,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub lines: usize,
}
