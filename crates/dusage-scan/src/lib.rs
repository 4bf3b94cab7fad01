//! Entry sizing engine for dusage.
//!
//! This crate decides how many bytes a single filesystem entry adds to its
//! parent directory's total. Traversal is left to the caller, which feeds
//! one entry at a time together with the parent directory's device.
//!
//! # Overview
//!
//! - **Hardlink deduplication** via a concurrent (device, inode) registry
//! - **Filesystem boundaries** honored unless crossing is enabled
//! - **Apparent or allocated size** selected by configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use dusage_scan::{stat_entry, SizeConfig, SizeResolver, SizeTally};
//!
//! let resolver = SizeResolver::new(SizeConfig::default());
//! let mut tally = SizeTally::new();
//!
//! let root = stat_entry("/srv").unwrap();
//! tally.add(&resolver.resolve(&root, None));
//!
//! let child = stat_entry("/srv/data").unwrap();
//! tally.add(&resolver.resolve(&child, Some(root.device_id())));
//!
//! println!("Total size: {} bytes", tally.total_bytes);
//! ```

mod metadata;
mod registry;
mod resolver;
mod tally;

pub use metadata::{entry_from_metadata, stat_entry};
pub use registry::HardLinkRegistry;
pub use resolver::{entry_bytes, resolve, Resolution, SizeResolver, SkipReason, BLOCK_SIZE};
pub use tally::SizeTally;

// Re-export core types for convenience
pub use dusage_core::{
    num_digits, num_digits_f64, DeviceId, EntryKind, EntryMeta, InodeInfo, ScanError,
    SizeConfig, SizeConfigBuilder, SizeError,
};
