use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder rendered in place of a binary (or unreadable) file's content.
pub const BINARY_PLACEHOLDER: &str = "[Binary file, content not included]";

/// Placeholder rendered when a file exceeds the configured size limit.
pub const TOO_LARGE_PLACEHOLDER: &str = "[File too large, content omitted]";

/// Whether a traversal entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

/// One directory or file encountered during traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalEntry {
    /// Path relative to the snapshot root.
    pub path: PathBuf,
    /// Nesting depth below the root (number of path components).
    pub depth: usize,
    pub kind: EntryKind,
}

/// A single file with its content and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the snapshot root.
    pub path: PathBuf,
    /// The content of the file as a string.
    ///
    /// If the file was detected as binary, could not be read, or exceeded the
    /// size limit, this holds a placeholder message instead.
    pub content: String,
    /// Whether the file was detected as binary (or unreadable).
    pub is_binary: bool,
    /// The size of the file in bytes, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// The complete result of a snapshot operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display name of the snapshot root directory.
    pub root_name: String,
    /// The indented structure listing of the tree.
    pub structure: String,
    /// All files found, in the same order as the structure listing.
    pub files: Vec<FileRecord>,
}
