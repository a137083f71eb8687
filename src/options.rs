use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOptions {
    pub root: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub binary_detection: BinaryDetection,
    pub file_size_limit: Option<u64>,
    pub include_file_size: bool,
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_patterns: Vec::new(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
            binary_detection: BinaryDetection::Simple,
            file_size_limit: None,
            include_file_size: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapshotOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn include_file_size(mut self, yes: bool) -> Self {
        self.options.include_file_size = yes;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}
