//! Hardlink registry for size deduplication.

use dashmap::DashSet;
use dusage_core::InodeInfo;

/// Records the multi-link inodes already charged during a sizing session.
///
/// Keys are (device, inode) pairs, so equal inode numbers on different
/// volumes never collide. The registry only grows; it lives as long as the
/// session that owns it. The backing set is sharded and `Sync`, so a single
/// registry may be shared by parallel workers.
#[derive(Debug, Default)]
pub struct HardLinkRegistry {
    seen: DashSet<InodeInfo>,
}

impl HardLinkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            seen: DashSet::new(),
        }
    }

    /// Check whether an identity has already been recorded.
    pub fn lookup(&self, device: u64, inode: u64) -> bool {
        self.seen.contains(&InodeInfo::new(inode, device))
    }

    /// Record an identity. Returns `true` if it was not present before.
    ///
    /// The check and the insert happen under one shard lock, so concurrent
    /// callers recording the same pair see exactly one `true`.
    pub fn record(&self, device: u64, inode: u64) -> bool {
        self.track(InodeInfo::new(inode, device))
    }

    /// Record an identity given as [`InodeInfo`].
    pub fn track(&self, info: InodeInfo) -> bool {
        self.seen.insert(info)
    }

    /// Get the number of distinct identities recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget everything, keeping the allocation for the next session.
    pub fn clear(&self) {
        self.seen.clear();
    }
}
