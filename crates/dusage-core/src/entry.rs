//! Entry descriptor types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Identifier of the device (mounted filesystem) an entry lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub u64);

impl DeviceId {
    /// Raw value conventionally used as `NODEV`, i.e. `(dev_t)-1`.
    pub const RAW_NODEV: u64 = u64::MAX;

    /// Create a new DeviceId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Convert a raw device number, mapping `NODEV` to `None`.
    ///
    /// Use this when forwarding `st_dev` values that may carry the all-ones
    /// "no device" marker instead of a real identifier.
    pub fn from_raw(raw: u64) -> Option<Self> {
        (raw != Self::RAW_NODEV).then_some(Self(raw))
    }
}

/// Inode identity used for hardlink detection.
///
/// Inode numbers are only unique within a device, so the pair is the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InodeInfo {
    /// Inode number.
    pub inode: u64,
    /// Device ID.
    pub device: u64,
}

impl InodeInfo {
    /// Create new inode info.
    pub fn new(inode: u64, device: u64) -> Self {
        Self { inode, device }
    }
}

/// Type of file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link (sized as the link itself).
    Symlink,
    /// Device node, FIFO or socket.
    Special,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }

    /// Check if this is a symlink.
    pub fn is_symlink(&self) -> bool {
        matches!(self, EntryKind::Symlink)
    }

    /// Check if this is a device node or other special file.
    pub fn is_special(&self) -> bool {
        matches!(self, EntryKind::Special)
    }
}

/// Metadata of a single entry, as obtained from a stat query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMeta {
    /// Path of the entry.
    pub path: PathBuf,
    /// Device the entry lives on.
    pub device: u64,
    /// Inode number.
    pub inode: u64,
    /// Number of hard links.
    pub nlink: u64,
    /// Apparent (logical) size in bytes.
    pub size: u64,
    /// Allocated 512-byte blocks.
    pub blocks: u64,
    /// Entry type.
    pub kind: EntryKind,
}

impl EntryMeta {
    /// Create a single-link entry with no allocated blocks.
    ///
    /// Intended as a starting point for the `with_*` setters.
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            device: 0,
            inode: 0,
            nlink: 1,
            size: 0,
            blocks: 0,
            kind,
        }
    }

    /// Set the (device, inode) identity.
    pub fn with_identity(mut self, device: u64, inode: u64) -> Self {
        self.device = device;
        self.inode = inode;
        self
    }

    /// Set the hard link count.
    pub fn with_nlink(mut self, nlink: u64) -> Self {
        self.nlink = nlink;
        self
    }

    /// Set the apparent size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the allocated block count.
    pub fn with_blocks(mut self, blocks: u64) -> Self {
        self.blocks = blocks;
        self
    }

    /// Inode identity of this entry.
    pub fn inode_info(&self) -> InodeInfo {
        InodeInfo::new(self.inode, self.device)
    }

    /// Device of this entry.
    pub fn device_id(&self) -> DeviceId {
        DeviceId(self.device)
    }

    /// Whether more than one directory entry references this inode.
    pub fn has_multiple_links(&self) -> bool {
        self.nlink > 1
    }
}
