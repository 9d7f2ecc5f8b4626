//! File Manager Module
//!
//! Orchestration of the registry with a FileStore backend.

pub mod manager;
pub mod types;

pub use manager::FileManager;
pub use types::*;
