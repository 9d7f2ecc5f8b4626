//! Registry Types
//!
//! Core types for the in-memory file registry.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::file_type::classify;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("file '{0}' already exists in the registry")]
    DuplicateName(String),

    #[error("file '{0}' not found in the registry")]
    NotFound(String),

    #[error("position {position} is out of bounds for a registry of {len} files")]
    InvalidPosition { position: usize, len: usize },

    #[error("invalid size range: min {min} exceeds max {max}")]
    InvalidRange { min: u64, max: u64 },
}

/// Coarse file classification derived from a name's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileType {
    Document,
    Image,
    Audio,
    Video,
    Archive,
    Other,
}

impl FileType {
    /// Display name used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Document => "Document",
            FileType::Image => "Image",
            FileType::Audio => "Audio",
            FileType::Video => "Video",
            FileType::Archive => "Archive",
            FileType::Other => "Other",
        }
    }

    /// Parse a category from its display name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "document" => Some(Self::Document),
            "image" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "archive" => Some(Self::Archive),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort orders supported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
    Modified,
}

impl SortKey {
    /// Parse a sort key from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "modified" | "date" => Some(Self::Modified),
            _ => None,
        }
    }
}

/// One tracked file: metadata plus an in-memory content snapshot.
///
/// `size` and `modified` always describe `content`; they are restamped
/// together whenever the content changes and are never set independently.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub name: String,
    pub content: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub file_type: FileType,
}

impl FileRecord {
    pub(crate) fn new(name: String, content: String) -> Self {
        let file_type = classify(&name);
        let size = content.len() as u64;
        Self {
            name,
            content,
            size,
            modified: Utc::now(),
            file_type,
        }
    }

    /// Recompute `size` from the content and restamp `modified`.
    pub(crate) fn refresh_stats(&mut self) {
        self.size = self.content.len() as u64;
        self.modified = Utc::now();
    }

    /// Number of newline-terminated lines in the snapshot.
    pub fn line_count(&self) -> usize {
        self.content.bytes().filter(|&b| b == b'\n').count()
    }
}
