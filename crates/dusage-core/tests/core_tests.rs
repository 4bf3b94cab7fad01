use dusage_core::{
    num_digits, num_digits_f64, DeviceId, EntryKind, EntryMeta, InodeInfo, SizeConfig, SizeError,
};

#[test]
fn test_inode_info() {
    let inode1 = InodeInfo::new(12345, 67890);
    assert_eq!(inode1.inode, 12345);
    assert_eq!(inode1.device, 67890);

    let inode2 = InodeInfo::new(12345, 67890);
    assert_eq!(inode1, inode2);

    // Same inode number on another device is a different identity
    let inode3 = InodeInfo::new(12345, 1);
    assert_ne!(inode1, inode3);
}

#[test]
fn test_entry_kind_discrimination() {
    assert!(EntryKind::File.is_file());
    assert!(!EntryKind::File.is_dir());

    assert!(EntryKind::Directory.is_dir());
    assert!(!EntryKind::Directory.is_special());

    assert!(EntryKind::Symlink.is_symlink());
    assert!(EntryKind::Special.is_special());
}

#[test]
fn test_entry_meta_serialization() {
    let entry = EntryMeta::new("/srv/data/blob", EntryKind::File)
        .with_identity(5, 42)
        .with_nlink(3)
        .with_size(10_000)
        .with_blocks(24);

    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"kind\":\"file\""));

    let back: EntryMeta = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn test_parent_device_sentinel() {
    // Root of a traversal has no parent device
    let parent: Option<DeviceId> = DeviceId::from_raw(u64::MAX);
    assert!(parent.is_none());

    let parent = DeviceId::from_raw(2049);
    assert_eq!(parent, Some(DeviceId::new(2049)));
}

#[test]
fn test_size_config_roundtrip() {
    let config = SizeConfig::builder()
        .count_links_once(false)
        .apparent_size(true)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back = SizeConfig::from_json(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_size_config_empty_json_uses_defaults() {
    let config = SizeConfig::from_json("{}").unwrap();
    assert_eq!(config, SizeConfig::default());
    assert!(config.count_links_once);
    assert!(!config.cross_filesystems);
    assert!(!config.apparent_size);
}

#[test]
fn test_digit_counts() {
    assert_eq!(num_digits(0), 1);
    assert_eq!(num_digits(9), 1);
    assert_eq!(num_digits(10), 2);
    assert_eq!(num_digits(999), 3);
    assert_eq!(num_digits(1000), 4);

    for (value, digits) in [(1u64, 1u32), (99, 2), (100, 3), (4096, 4), (1_048_576, 7)] {
        assert_eq!(num_digits(value), digits, "value {value}");
        assert_eq!(num_digits_f64(value as f64).unwrap(), digits, "value {value}");
    }
}

#[test]
fn test_negative_magnitude_is_error() {
    let err = num_digits_f64(-0.5).unwrap_err();
    assert!(matches!(err, SizeError::InvalidMagnitude { value } if value == -0.5));
}
