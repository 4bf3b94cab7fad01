//! Conversion from filesystem metadata to entry descriptors.

use std::fs::Metadata;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use dusage_core::{EntryKind, EntryMeta, ScanError};

#[cfg(not(unix))]
use crate::resolver::BLOCK_SIZE;

/// Stat a path without following a final symlink.
pub fn stat_entry(path: impl AsRef<Path>) -> Result<EntryMeta, ScanError> {
    let path = path.as_ref();
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ScanError::io(path, e))?;
    Ok(entry_from_metadata(path, &metadata))
}

/// Build an entry descriptor from already obtained metadata.
pub fn entry_from_metadata(path: impl AsRef<Path>, metadata: &Metadata) -> EntryMeta {
    EntryMeta {
        path: path.as_ref().to_path_buf(),
        device: get_dev(metadata),
        inode: get_ino(metadata),
        nlink: get_nlink(metadata),
        size: metadata.len(),
        blocks: get_blocks(metadata),
        kind: entry_kind(metadata),
    }
}

fn entry_kind(metadata: &Metadata) -> EntryKind {
    let file_type = metadata.file_type();
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Special
    }
}

// Cross-platform metadata helpers

/// Get the device ID from metadata.
#[cfg(unix)]
fn get_dev(metadata: &Metadata) -> u64 {
    metadata.dev()
}

#[cfg(not(unix))]
fn get_dev(_metadata: &Metadata) -> u64 {
    0
}

/// Get the inode number from metadata.
#[cfg(unix)]
fn get_ino(metadata: &Metadata) -> u64 {
    metadata.ino()
}

#[cfg(not(unix))]
fn get_ino(_metadata: &Metadata) -> u64 {
    0
}

/// Get the number of hard links from metadata.
#[cfg(unix)]
fn get_nlink(metadata: &Metadata) -> u64 {
    metadata.nlink()
}

#[cfg(not(unix))]
fn get_nlink(_metadata: &Metadata) -> u64 {
    1 // No inode identity to dedup on
}

/// Get the number of 512-byte blocks from metadata.
#[cfg(unix)]
fn get_blocks(metadata: &Metadata) -> u64 {
    metadata.blocks()
}

#[cfg(not(unix))]
fn get_blocks(metadata: &Metadata) -> u64 {
    metadata.len().div_ceil(BLOCK_SIZE)
}
