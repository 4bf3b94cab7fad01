//! dusage - size filesystem entries with hardlink and boundary handling.
//!
//! Usage:
//!   dusage [PATH]...           Size each path (defaults to current directory)
//!   dusage -A [PATH]...        Report apparent sizes
//!   dusage --json [PATH]...    Emit results as JSON
//!   dusage --help              Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dusage_scan::{
    num_digits, stat_entry, EntryKind, EntryMeta, Resolution, SizeConfig, SizeResolver, SizeTally,
};

#[derive(Parser)]
#[command(
    name = "dusage",
    version,
    about = "Size filesystem entries, counting hard links once",
    long_about = "dusage reports how much each given path adds to its parent directory's \
                  disk usage.\n\nEach operand is sized on its own, without descending \
                  into directories, and is treated as the root of its own walk, so a \
                  mount point given on the command line is always counted. Hard links \
                  are charged once per run."
)]
struct Cli {
    /// Paths to size (defaults to current directory)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Count every hard link instead of once per inode
    #[arg(short = 'L', long)]
    count_links: bool,

    /// Count entries below a root that live on another filesystem
    #[arg(long)]
    cross: bool,

    /// Report apparent sizes rather than allocated blocks
    #[arg(short = 'A', long)]
    apparent_size: bool,

    /// Print sizes in human-readable form
    #[arg(short = 'H', long)]
    human: bool,

    /// Emit results as JSON
    #[arg(long, conflicts_with = "human")]
    json: bool,

    /// Show why entries were skipped
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a SizeConfig,
    entries: Vec<EntryReport>,
    tally: SizeTally,
}

#[derive(Serialize)]
struct EntryReport {
    path: PathBuf,
    kind: EntryKind,
    #[serde(flatten)]
    resolution: Resolution,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SizeConfig::builder()
        .count_links_once(!cli.count_links)
        .cross_filesystems(cli.cross)
        .apparent_size(cli.apparent_size)
        .build()
        .context("Invalid configuration")?;

    let resolver = SizeResolver::new(config);
    let mut tally = SizeTally::new();
    let mut entries = Vec::with_capacity(cli.paths.len());

    for path in &cli.paths {
        let entry = stat_entry(path).with_context(|| format!("Cannot stat {}", path.display()))?;
        let report = resolve_operand(&resolver, entry);
        tally.add(&report.resolution);
        entries.push(report);
    }

    if cli.json {
        let report = Report {
            config: resolver.config(),
            entries,
            tally,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_entries(&entries, &tally, cli.human, cli.verbose);

    Ok(())
}

/// Size one operand as the root of its own walk.
///
/// Operands have no parent directory in this run, so they are never
/// skipped for sitting on another filesystem.
fn resolve_operand(resolver: &SizeResolver, entry: EntryMeta) -> EntryReport {
    let resolution = resolver.resolve(&entry, None);
    EntryReport {
        path: entry.path,
        kind: entry.kind,
        resolution,
    }
}

/// Print one aligned line per entry followed by the total.
fn print_entries(entries: &[EntryReport], tally: &SizeTally, human: bool, verbose: bool) {
    let sizes: Vec<String> = entries
        .iter()
        .map(|e| e.resolution.bytes)
        .chain(std::iter::once(tally.total_bytes))
        .map(|bytes| format_size(bytes, human))
        .collect();

    let width = if human {
        sizes.iter().map(String::len).max().unwrap_or(1)
    } else {
        num_digits(tally.total_bytes) as usize
    };

    for (entry, size) in entries.iter().zip(&sizes) {
        match entry.resolution.skipped {
            Some(reason) if verbose => {
                println!("{size:>width$}  {}  ({reason})", entry.path.display());
            }
            _ => println!("{size:>width$}  {}", entry.path.display()),
        }
    }

    if entries.len() > 1 {
        println!("{:>width$}  total", sizes[sizes.len() - 1]);
    }

    if verbose && tally.skipped() > 0 {
        eprintln!(
            "{} skipped: {} hard link(s), {} on other filesystems, {} special file(s)",
            tally.skipped(),
            tally.duplicate_links,
            tally.cross_device,
            tally.special_nodes
        );
    }
}

/// Format size in raw bytes or human-readable form.
fn format_size(bytes: u64, human: bool) -> String {
    if human {
        humansize::format_size(bytes, humansize::BINARY)
    } else {
        bytes.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mount_point_operand_is_counted() {
        let resolver = SizeResolver::new(SizeConfig::default());
        // A mount point: its device differs from everything else seen so far
        let mounted = EntryMeta::new("/boot", EntryKind::Directory)
            .with_identity(42, 2)
            .with_blocks(8);

        let report = resolve_operand(&resolver, mounted);
        assert_eq!(report.resolution.skipped, None);
        assert_eq!(report.resolution.bytes, 4096);
    }

    #[test]
    fn test_stat_operand_not_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        std::fs::write(&path, vec![1u8; 3000]).unwrap();

        let config = SizeConfig::builder().apparent_size(true).build().unwrap();
        let resolver = SizeResolver::new(config);

        let report = resolve_operand(&resolver, stat_entry(&path).unwrap());
        assert!(report.resolution.is_counted());
        assert_eq!(report.resolution.bytes, 3000);
        assert_eq!(report.kind, EntryKind::File);
    }
}
