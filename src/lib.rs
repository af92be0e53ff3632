//! quire: a Markdown content-record store
//!
//! This crate implements the file-based content contract a static-site
//! renderer consumes: a directory of records, each a front-matter header
//! plus a markdown body, with enumeration and authoring-time validation.

pub mod commands;
pub mod config;
pub mod record;
pub mod validate;

use anyhow::Result;
use std::path::Path;

/// Configuration file name looked up in the store root
const CONFIG_FILE: &str = "quire.yml";

/// A content-record store rooted at a directory
#[derive(Clone)]
pub struct Quire {
    /// Store configuration
    pub config: config::StoreConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the records
    pub content_dir: std::path::PathBuf,
}

impl Quire {
    /// Open a store rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::StoreConfig::load(&config_path)?
        } else {
            config::StoreConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Enumerate all records in the store
    pub fn enumerate(&self) -> record::Enumeration {
        record::RecordLoader::new(self).enumerate()
    }

    /// Validate every record and report all defects found
    pub fn check(&self) -> Vec<validate::Diagnostic> {
        commands::check::collect_diagnostics(self)
    }
}
