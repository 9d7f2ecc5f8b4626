//! filedex - an ordered in-memory registry of managed files
//!
//! Keeps an ordered index of file metadata and content snapshots mirroring
//! a flat directory of real files: positional CRUD, duplicate-name
//! prevention, three stable sort orders, and four search modes. Physical
//! file effects go through the FileStore capability; the registry itself
//! never touches the host filesystem.

pub mod manager;
pub mod registry;
pub mod store;

pub use manager::{FileManager, FileStats, ManagerError};
pub use registry::{classify, FileRecord, FileRegistry, FileType, RegistryError, SortKey};
pub use store::{DiskStore, FileStore, MemoryStore, StoreError};
