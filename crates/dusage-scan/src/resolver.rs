//! Per-entry size resolution.

use serde::{Deserialize, Serialize};
use strum::Display;

use dusage_core::{DeviceId, EntryMeta, SizeConfig};

use crate::registry::HardLinkRegistry;

/// Bytes per allocated block as reported by stat(2).
pub const BLOCK_SIZE: u64 = 512;

/// Why an entry contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Entry lives on another device than its parent directory.
    #[strum(to_string = "different filesystem")]
    CrossDevice,
    /// Inode already counted through another hard link.
    #[strum(to_string = "hard link already counted")]
    HardLinkDuplicate,
    /// Device node, FIFO or socket.
    #[strum(to_string = "special file")]
    SpecialNode,
}

/// Outcome of sizing one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Bytes the entry adds to its parent's total.
    pub bytes: u64,
    /// Set when the entry was not charged.
    pub skipped: Option<SkipReason>,
}

impl Resolution {
    /// A charged entry.
    pub fn counted(bytes: u64) -> Self {
        Self {
            bytes,
            skipped: None,
        }
    }

    /// An entry contributing zero bytes.
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            bytes: 0,
            skipped: Some(reason),
        }
    }

    /// Whether the entry was charged.
    pub fn is_counted(&self) -> bool {
        self.skipped.is_none()
    }
}

/// Sizing session: a config snapshot plus the hardlink registry it fills.
///
/// Create one per traversal and drop it when the traversal ends. `resolve`
/// takes `&self`, so the resolver can be shared across worker threads.
#[derive(Debug, Default)]
pub struct SizeResolver {
    config: SizeConfig,
    registry: HardLinkRegistry,
}

impl SizeResolver {
    /// Create a resolver with an empty registry.
    pub fn new(config: SizeConfig) -> Self {
        Self {
            config,
            registry: HardLinkRegistry::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SizeConfig {
        &self.config
    }

    /// Registry of inodes charged so far.
    pub fn registry(&self) -> &HardLinkRegistry {
        &self.registry
    }

    /// Size the entry against its parent directory's device.
    ///
    /// `parent_device` is `None` for the root of a traversal, which is never
    /// treated as crossing a boundary.
    pub fn resolve(&self, entry: &EntryMeta, parent_device: Option<DeviceId>) -> Resolution {
        resolve(entry, parent_device, &self.config, &self.registry)
    }
}

/// Size one entry using an externally owned registry.
pub fn resolve(
    entry: &EntryMeta,
    parent_device: Option<DeviceId>,
    config: &SizeConfig,
    registry: &HardLinkRegistry,
) -> Resolution {
    if !config.cross_filesystems
        && parent_device.is_some_and(|parent| parent != entry.device_id())
    {
        tracing::debug!(
            path = %entry.path.display(),
            device = entry.device,
            "skipping entry on another filesystem"
        );
        return Resolution::skipped(SkipReason::CrossDevice);
    }

    // Size fields of device nodes carry no storage meaning.
    if entry.kind.is_special() {
        tracing::debug!(path = %entry.path.display(), "skipping special file");
        return Resolution::skipped(SkipReason::SpecialNode);
    }

    if config.count_links_once && entry.has_multiple_links() {
        if !registry.track(entry.inode_info()) {
            tracing::debug!(
                path = %entry.path.display(),
                device = entry.device,
                inode = entry.inode,
                "skipping hard link already counted"
            );
            return Resolution::skipped(SkipReason::HardLinkDuplicate);
        }
        tracing::trace!(
            path = %entry.path.display(),
            device = entry.device,
            inode = entry.inode,
            nlink = entry.nlink,
            "first sighting of multi-link inode"
        );
    }

    Resolution::counted(entry_bytes(entry, config.apparent_size))
}

/// Size of an entry in the selected unit, ignoring every policy.
pub fn entry_bytes(entry: &EntryMeta, apparent_size: bool) -> u64 {
    if apparent_size {
        entry.size
    } else {
        entry.blocks.saturating_mul(BLOCK_SIZE)
    }
}
