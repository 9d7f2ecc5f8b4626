//! File Type Classification
//!
//! Maps a file name's extension to a coarse category through a fixed table
//! built once at startup and never mutated afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::types::FileType;

lazy_static! {
    static ref FILE_TYPE_MAP: HashMap<&'static str, FileType> = {
        let mut m = HashMap::new();
        for ext in ["txt", "pdf", "doc", "docx"] {
            m.insert(ext, FileType::Document);
        }
        for ext in ["jpg", "png", "gif", "bmp"] {
            m.insert(ext, FileType::Image);
        }
        for ext in ["mp3", "wav", "ogg", "flac"] {
            m.insert(ext, FileType::Audio);
        }
        for ext in ["mp4", "avi", "mov", "mkv"] {
            m.insert(ext, FileType::Video);
        }
        for ext in ["zip", "rar", "7z", "tar"] {
            m.insert(ext, FileType::Archive);
        }
        m
    };
}

/// Classify a file name by the substring after its last `.`, matched
/// case-insensitively. Missing or unmapped extensions are `Other`.
/// Pure and total, no failure mode.
pub fn classify(name: &str) -> FileType {
    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() => {
            let ext = name[pos + 1..].to_ascii_lowercase();
            FILE_TYPE_MAP
                .get(ext.as_str())
                .copied()
                .unwrap_or(FileType::Other)
        }
        _ => FileType::Other,
    }
}
