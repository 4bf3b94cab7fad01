//! Running totals over resolved entries.

use serde::{Deserialize, Serialize};

use crate::resolver::{Resolution, SkipReason};

/// Accumulates resolutions on the caller's side of the sizing core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTally {
    /// Total bytes charged.
    pub total_bytes: u64,
    /// Number of entries fed in.
    pub entries: u64,
    /// Entries skipped for living on another filesystem.
    pub cross_device: u64,
    /// Hard links skipped because their inode was already counted.
    pub duplicate_links: u64,
    /// Special files skipped.
    pub special_nodes: u64,
}

impl SizeTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one resolution.
    pub fn add(&mut self, resolution: &Resolution) {
        self.entries += 1;
        self.total_bytes = self.total_bytes.saturating_add(resolution.bytes);

        match resolution.skipped {
            Some(SkipReason::CrossDevice) => self.cross_device += 1,
            Some(SkipReason::HardLinkDuplicate) => self.duplicate_links += 1,
            Some(SkipReason::SpecialNode) => self.special_nodes += 1,
            None => {}
        }
    }

    /// Number of entries that contributed nothing.
    pub fn skipped(&self) -> u64 {
        self.cross_device + self.duplicate_links + self.special_nodes
    }

    /// Number of entries that were charged.
    pub fn counted(&self) -> u64 {
        self.entries - self.skipped()
    }
}

impl<'a> Extend<&'a Resolution> for SizeTally {
    fn extend<I: IntoIterator<Item = &'a Resolution>>(&mut self, iter: I) {
        for resolution in iter {
            self.add(resolution);
        }
    }
}
