//! File Registry Module
//!
//! The ordered in-memory index of managed files: record types, extension
//! based classification, and the registry itself.

pub mod file_type;
pub mod registry;
pub mod types;

pub use file_type::classify;
pub use registry::FileRegistry;
pub use types::*;
