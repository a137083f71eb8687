use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("source directory '{}' not found", .0.display())]
    SourceNotFound(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid exclusion pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },
}
impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
