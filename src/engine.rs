use crate::error::SnapshotError;
use crate::options::{BinaryDetection, SnapshotOptions};
use crate::tree::render_structure;
use crate::types::{
    BINARY_PLACEHOLDER, EntryKind, FileRecord, Snapshot, TOO_LARGE_PLACEHOLDER, TraversalEntry,
};
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of leading bytes inspected for binary detection.
const BINARY_SNIFF_LEN: u64 = 1024;

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &SnapshotOptions) -> Result<Self, SnapshotError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .parents(false)
            .ignore(false);
        if !options.exclude_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.exclude_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| SnapshotError::Pattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder.build().map_err(|e| SnapshotError::Pattern {
                pattern: options.exclude_patterns.join(", "),
                reason: e.to_string(),
            })?;
            // Patterns match entry names, not full paths; a matching directory
            // prunes its whole subtree. The root itself is never matched.
            builder.filter_entry(move |entry| {
                entry.depth() == 0 || !matcher.is_match(Path::new(entry.file_name()))
            });
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn collect_entries(self, root: &Path) -> Vec<TraversalEntry> {
        let mut entries = Vec::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("skipping unreadable entry: {}", _e);
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let kind = match entry.file_type() {
                Some(t) if t.is_dir() => EntryKind::Directory,
                Some(_) => EntryKind::File,
                None => continue,
            };
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            entries.push(TraversalEntry {
                depth: rel.components().count(),
                path: rel,
                kind,
            });
        }
        entries.sort_by(document_order);
        entries
    }
}

/// Document order: depth-first, a directory before its children; within a
/// directory, files sorted by name before subdirectories sorted by name.
fn document_order(a: &TraversalEntry, b: &TraversalEntry) -> Ordering {
    let mut ac = a.path.components();
    let mut bc = b.path.components();
    loop {
        match (ac.next(), bc.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x == y {
                    continue;
                }
                // A non-final component is by construction a directory.
                let x_rank = rank(ac.clone().next().is_none(), a.kind);
                let y_rank = rank(bc.clone().next().is_none(), b.kind);
                return x_rank
                    .cmp(&y_rank)
                    .then_with(|| x.as_os_str().cmp(y.as_os_str()));
            }
        }
    }
}
fn rank(is_final: bool, kind: EntryKind) -> u8 {
    if is_final && kind == EntryKind::File { 0 } else { 1 }
}

fn root_display_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}

/// Reads a file's content, classifying it as binary where appropriate.
///
/// Per-file failures never propagate: an unreadable file is conservatively
/// reported as binary and the run continues.
fn read_file_content(
    path: &Path,
    binary_detection: BinaryDetection,
    size_limit: Option<u64>,
) -> (String, bool) {
    if let Some(limit) = size_limit {
        match fs::metadata(path) {
            Ok(metadata) if metadata.len() > limit => {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    "File too large ({} > {}), skipping content",
                    metadata.len(),
                    limit
                );
                return (TOO_LARGE_PLACEHOLDER.to_string(), false);
            }
            Ok(_) => {}
            Err(_) => return (BINARY_PLACEHOLDER.to_string(), true),
        }
    }
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return (BINARY_PLACEHOLDER.to_string(), true),
    };
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    if reader
        .by_ref()
        .take(BINARY_SNIFF_LEN)
        .read_to_end(&mut bytes)
        .is_err()
    {
        return (BINARY_PLACEHOLDER.to_string(), true);
    }
    let is_binary = match binary_detection {
        BinaryDetection::Simple => bytes.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&bytes).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return (BINARY_PLACEHOLDER.to_string(), true);
    }
    if reader.read_to_end(&mut bytes).is_err() {
        return (BINARY_PLACEHOLDER.to_string(), true);
    }
    (String::from_utf8_lossy(&bytes).into_owned(), false)
}

/// Walks the source directory and produces a [`Snapshot`].
///
/// Fails only when the source is not a directory or an exclusion pattern is
/// invalid; per-file read errors are isolated and the affected file is
/// recorded with the binary placeholder.
pub fn snapshot(options: SnapshotOptions) -> Result<Snapshot, SnapshotError> {
    if !options.root.is_dir() {
        return Err(SnapshotError::SourceNotFound(options.root.clone()));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting snapshot with root: {}", options.root.display());
    let walker = Walker::new(&options)?;
    let entries = walker.collect_entries(&options.root);
    let root_name = root_display_name(&options.root);
    let structure = render_structure(&root_name, &entries);
    let mut files = Vec::new();
    for entry in &entries {
        if entry.kind != EntryKind::File {
            continue;
        }
        let abs = options.root.join(&entry.path);
        let (content, is_binary) =
            read_file_content(&abs, options.binary_detection, options.file_size_limit);
        let size = if options.include_file_size {
            fs::metadata(&abs).ok().map(|m| m.len())
        } else {
            None
        };
        files.push(FileRecord {
            path: entry.path.clone(),
            content,
            is_binary,
            size,
        });
    }
    Ok(Snapshot {
        root_name,
        structure,
        files,
    })
}
