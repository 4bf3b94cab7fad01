//! Core types and helpers for dusage.
//!
//! This crate provides the entry descriptor handed to the sizing engine,
//! the sizing configuration, error types, and the digit-count helper used
//! for column widths.

mod config;
mod digits;
mod entry;
mod error;

pub use config::{SizeConfig, SizeConfigBuilder};
pub use digits::{num_digits, num_digits_f64};
pub use entry::{DeviceId, EntryKind, EntryMeta, InodeInfo};
pub use error::{ScanError, SizeError};
