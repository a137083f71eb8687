//! Internal module for rendering the structure listing from traversal entries.

use crate::types::{EntryKind, TraversalEntry};

/// Renders the indented structure listing for a snapshot.
///
/// The entries are expected to be relative paths already in document order.
/// Indentation is derived directly from each entry's depth, two spaces per
/// level; directories carry a trailing slash.
pub(crate) fn render_structure(root_name: &str, entries: &[TraversalEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{}/", root_name));

    for entry in entries {
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let indent = "  ".repeat(entry.depth);
        match entry.kind {
            EntryKind::Directory => lines.push(format!("{indent}- {name}/")),
            EntryKind::File => lines.push(format!("{indent}- {name}")),
        }
    }

    lines.join("\n")
}
