//! Output formatting for snapshots.
//!
//! Provides functions to format a [`Snapshot`] into the backup document or
//! JSON, and to write the result to a file. Formatting preserves the exact
//! content of files and the structure listing.

use crate::types::BINARY_PLACEHOLDER;
use crate::{Snapshot, SnapshotError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Backup,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Backup => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the snapshot into a string.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Backup => format_backup(snapshot),
        OutputFormat::Json => format_json(snapshot, pretty),
    }
}

/// Writes the formatted snapshot to a file.
pub fn write_snapshot_to_file(
    snapshot: &Snapshot,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SnapshotError> {
    let content = format_snapshot(snapshot, format, pretty);
    fs::write(&path, content).map_err(|e| SnapshotError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_backup(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&format!("# Backup of `{}`\n\n", snapshot.root_name));
    out.push_str("## Folder Structure\n\n");
    out.push_str("```\n");
    out.push_str(&snapshot.structure);
    if !snapshot.structure.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n");
    out.push_str("---\n\n");

    for file in &snapshot.files {
        out.push_str(&format!("-- {} --\n", file.path.display()));
        if file.is_binary {
            out.push_str(BINARY_PLACEHOLDER);
            out.push_str("\n\n");
        } else {
            out.push_str(&format!("```{}\n", fence_tag(&file.path)));
            out.push_str(&file.content);
            if !file.content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n\n");
        }
    }
    out
}

fn format_json(snapshot: &Snapshot, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(snapshot).expect("JSON serialization failed")
    } else {
        serde_json::to_string(snapshot).expect("JSON serialization failed")
    }
}

fn fence_tag(path: &Path) -> &str {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .unwrap_or("text")
}
