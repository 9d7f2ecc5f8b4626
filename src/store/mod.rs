//! File Store Module
//!
//! Physical file effects behind a capability trait. Two backends:
//! - DiskStore: a flat directory on the host filesystem
//! - MemoryStore: a map, for tests and sandboxed use

pub mod disk_store;
pub mod memory_store;
pub mod types;

pub use disk_store::DiskStore;
pub use memory_store::MemoryStore;
pub use types::*;
