use crate::classify::Category;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single scanned file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path on disk
    pub path: PathBuf,

    /// Root-relative path, forward-slash normalized on every platform
    pub relative_path: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Classification from the extension/basename tables
    pub category: Category,
}

/// A bounded-size, single-category group of files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Deterministic id: `"{category}_{sequence}"`, sequence per category
    /// starting at 1
    pub id: String,

    /// Category shared by every file in the chunk
    pub category: Category,

    /// Files in scan order
    pub files: Vec<FileRecord>,

    /// Sum of the member file sizes
    pub total_size_bytes: u64,
}

impl Chunk {
    /// Number of files in the chunk
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// A chunk may exceed the size bound only when it holds a single file
    /// that is itself larger than the bound
    #[must_use]
    pub fn is_oversized_singleton(&self, max_chunk_size: u64) -> bool {
        self.files.len() == 1 && self.total_size_bytes > max_chunk_size
    }
}
