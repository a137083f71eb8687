//! Command-line interface for snapdoc.
//!
//! This binary walks a source directory and writes a single backup document
//! containing the tree's structure listing followed by each file's content.

use clap::{Parser, ValueEnum};
use snapdoc::{BinaryDetection, SnapshotBuilder, output, snapshot};
use std::path::PathBuf;
use std::process::exit;

/// snapdoc — directory backup document tool
#[derive(Parser)]
#[command(name = "snapdoc", version, about, long_about = None)]
struct Cli {
    /// Source directory to back up
    source: PathBuf,

    /// Path of the output backup document
    output: PathBuf,

    /// Exclusion glob patterns matched against entry names (can be repeated)
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Respect .gitignore files under the source tree
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// File size limit in bytes (larger files have content omitted)
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Backup)]
    format: Format,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Record file sizes (JSON output only)
    #[arg(long)]
    file_sizes: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Backup,
    Json,
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Backup => output::OutputFormat::Backup,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let options = SnapshotBuilder::new(cli.source)
        .exclude_patterns(cli.exclude)
        .respect_gitignore(cli.gitignore)
        .include_hidden(!cli.no_hidden)
        .follow_links(cli.follow_links)
        .binary_detection(cli.binary_detection)
        .file_size_limit(cli.file_size_limit)
        .include_file_size(cli.file_sizes);
    let options = if let Some(depth) = cli.max_depth {
        options.max_depth(depth)
    } else {
        options.no_limit_depth()
    }
    .build();

    let snap = match snapshot(options) {
        Ok(snap) => snap,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = output::write_snapshot_to_file(&snap, cli.format.into(), &cli.output, cli.pretty)
    {
        eprintln!("Error: {}", e);
        exit(1);
    }

    println!("Backup successfully created at: {}", cli.output.display());
}
