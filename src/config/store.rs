//! Store configuration (quire.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration for a content-record store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the records, relative to the store root
    pub content_dir: String,

    /// Include draft records in listings
    pub include_drafts: bool,

    /// Verify local image targets in record bodies
    pub check_body_images: bool,

    /// Directory names to skip during enumeration, in addition to the
    /// always-skipped underscore-prefixed directories
    #[serde(default)]
    pub skip: Vec<String>,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            include_drafts: false,
            check_body_images: true,
            skip: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: StoreConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.content_dir, "content");
        assert!(!config.include_drafts);
        assert!(config.check_body_images);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: src/content
include_drafts: true
skip:
  - fixtures
"#;
        let config: StoreConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_dir, "src/content");
        assert!(config.include_drafts);
        assert_eq!(config.skip, vec!["fixtures"]);
    }
}
