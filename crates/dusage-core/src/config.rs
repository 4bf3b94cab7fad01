//! Sizing configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::SizeError;

/// Policy snapshot applied to every entry of a sizing session.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct SizeConfig {
    /// Count a multi-link inode only the first time it is seen.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub count_links_once: bool,

    /// Cross filesystem boundaries.
    #[builder(default = "false")]
    #[serde(default)]
    pub cross_filesystems: bool,

    /// Use apparent size vs disk usage.
    #[builder(default = "false")]
    #[serde(default)]
    pub apparent_size: bool,
}

fn default_true() -> bool {
    true
}

impl SizeConfig {
    /// Create a new size config builder.
    pub fn builder() -> SizeConfigBuilder {
        SizeConfigBuilder::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SizeError> {
        serde_json::from_str(json).map_err(|e| SizeError::InvalidConfig {
            message: e.to_string(),
        })
    }
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            count_links_once: true,
            cross_filesystems: false,
            apparent_size: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = SizeConfig::builder()
            .apparent_size(true)
            .cross_filesystems(true)
            .build()
            .unwrap();

        assert!(config.apparent_size);
        assert!(config.cross_filesystems);
        assert!(config.count_links_once);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = SizeConfig::builder().build().unwrap();
        assert_eq!(built, SizeConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SizeConfig::from_json(r#"{ "apparent_size": true }"#).unwrap();
        assert!(config.apparent_size);
        assert!(config.count_links_once);
        assert!(!config.cross_filesystems);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SizeConfig::from_json(r#"{ "apparent_size": "yes" }"#).unwrap_err();
        assert!(matches!(err, SizeError::InvalidConfig { .. }));
    }
}
