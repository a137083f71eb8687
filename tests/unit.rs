use snapdoc::output::{OutputFormat, format_snapshot};
use snapdoc::{BINARY_PLACEHOLDER, BinaryDetection, SnapshotBuilder, snapshot};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;
#[test]
fn test_basic_scan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello world").unwrap();
    let options = SnapshotBuilder::new(dir.path()).build();
    let snap = snapshot(options).unwrap();
    assert_eq!(snap.files.len(), 1);
    assert_eq!(snap.files[0].content, "hello world");
    assert!(!snap.files[0].is_binary);
}
#[test]
fn test_content_round_trip() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("multi.rs"), "fn main() {\n    ()\n}\n").unwrap();
    let options = SnapshotBuilder::new(dir.path()).build();
    let snap = snapshot(options).unwrap();
    let doc = format_snapshot(&snap, OutputFormat::Backup, false);
    assert!(doc.contains("-- multi.rs --\n```rs\nfn main() {\n    ()\n}\n```\n"));
}
#[test]
fn test_exclude_pattern() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.log"), "b").unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .exclude_patterns(vec!["*.log".into()])
        .build();
    let snap = snapshot(options).unwrap();
    assert_eq!(snap.files.len(), 1);
    assert!(snap.files[0].path.ends_with("a.txt"));
    assert!(!snap.structure.contains("b.log"));
}
#[test]
fn test_exclude_directory_prunes_subtree() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/pkg.js"), "x").unwrap();
    fs::write(dir.path().join("index.js"), "y").unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .exclude_patterns(vec!["node_modules".into()])
        .build();
    let snap = snapshot(options).unwrap();
    assert_eq!(snap.files.len(), 1);
    assert!(!snap.structure.contains("node_modules"));
    assert!(!snap.structure.contains("pkg.js"));
}
#[test]
fn test_exclude_patterns_commutative() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.log"), "b").unwrap();
    fs::write(dir.path().join("c.bin"), "c").unwrap();
    let forward = snapshot(
        SnapshotBuilder::new(dir.path())
            .exclude_patterns(vec!["*.log".into(), "*.bin".into()])
            .build(),
    )
    .unwrap();
    let reversed = snapshot(
        SnapshotBuilder::new(dir.path())
            .exclude_patterns(vec!["*.bin".into(), "*.log".into()])
            .build(),
    )
    .unwrap();
    assert_eq!(
        format_snapshot(&forward, OutputFormat::Backup, false),
        format_snapshot(&reversed, OutputFormat::Backup, false)
    );
    assert_eq!(forward.files.len(), 1);
}
#[test]
fn test_binary_null_byte() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bin.dat"), vec![0, 1, 2, 3]).unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .binary_detection(BinaryDetection::Simple)
        .build();
    let snap = snapshot(options).unwrap();
    assert!(snap.files[0].is_binary);
    assert_eq!(snap.files[0].content, BINARY_PLACEHOLDER);
    let doc = format_snapshot(&snap, OutputFormat::Backup, false);
    assert!(doc.contains("-- bin.dat --\n[Binary file, content not included]"));
    assert!(!doc.contains("```dat"));
}
#[test]
fn test_null_byte_outside_sniff_window() {
    let dir = tempdir().unwrap();
    let mut bytes = vec![b'a'; 2000];
    bytes.push(0);
    fs::write(dir.path().join("late.txt"), bytes).unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .binary_detection(BinaryDetection::Simple)
        .build();
    let snap = snapshot(options).unwrap();
    assert!(!snap.files[0].is_binary);
}
#[test]
fn test_no_extension_fence_tag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Makefile"), "all:").unwrap();
    let options = SnapshotBuilder::new(dir.path()).build();
    let snap = snapshot(options).unwrap();
    let doc = format_snapshot(&snap, OutputFormat::Backup, false);
    assert!(doc.contains("-- Makefile --\n```text\nall:\n```\n"));
}
#[test]
fn test_file_size_limit() {
    let dir = tempdir().unwrap();
    let mut f = File::create(dir.path().join("big.txt")).unwrap();
    write!(f, "{}", "A".repeat(5000)).unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .file_size_limit(Some(100))
        .build();
    let snap = snapshot(options).unwrap();
    assert!(snap.files[0].content.contains("File too large"));
}
#[test]
fn test_hidden_files_included_by_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
    let options = SnapshotBuilder::new(dir.path()).build();
    let snap = snapshot(options).unwrap();
    assert_eq!(snap.files.len(), 1);
    assert!(snap.structure.contains(".env"));
}
#[test]
fn test_determinism() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    let first = snapshot(SnapshotBuilder::new(dir.path()).build()).unwrap();
    let second = snapshot(SnapshotBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        format_snapshot(&first, OutputFormat::Backup, false),
        format_snapshot(&second, OutputFormat::Backup, false)
    );
}
