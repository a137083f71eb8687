//! # Snapdoc
//!
//! `snapdoc` walks a source directory, builds an indented structure listing, and
//! reads each file's content, producing a single backup document that records the
//! tree's layout followed by every file's text (or a placeholder for binary files).
//!
//! Exclusion glob patterns are matched against entry names during the walk, so a
//! matching directory prunes its whole subtree. Binary detection defaults to
//! scanning the first 1024 bytes for a NUL byte; files that cannot be read are
//! conservatively treated as binary and never abort the run.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use snapdoc::{SnapshotBuilder, BinaryDetection, snapshot, output};
//!
//! let options = SnapshotBuilder::new("./my-project")
//!     .exclude_patterns(vec!["*.pyc".into(), "node_modules".into()])
//!     .binary_detection(BinaryDetection::Simple)
//!     .build();
//!
//! let snap = snapshot(options).expect("Failed to scan directory");
//!
//! println!("Structure:\n{}", snap.structure);
//! output::write_snapshot_to_file(&snap, output::OutputFormat::Backup, "backup.md", false)
//!     .expect("Failed to write backup");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::snapshot;
pub use error::SnapshotError;
pub use options::{BinaryDetection, SnapshotBuilder, SnapshotOptions};
pub use types::{
    BINARY_PLACEHOLDER, EntryKind, FileRecord, Snapshot, TOO_LARGE_PLACEHOLDER, TraversalEntry,
};
