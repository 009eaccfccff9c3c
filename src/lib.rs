//! fstudio: a photography studio site with a local content store
//!
//! One canonical content document (hero, services, portfolio, reviews, blog,
//! about, contacts) lives in a single persisted JSON slot. The admin editor
//! mutates a working copy and commits it explicitly; the public page server
//! polls the slot on a fixed interval and re-renders whatever it finds.

pub mod commands;
pub mod config;
pub mod content;
pub mod editor;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use content::FileStore;

/// The main studio application
#[derive(Clone)]
pub struct Studio {
    /// Studio configuration
    pub config: config::StudioConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Studio {
    /// Create a new Studio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("studio.yml");

        let config = if config_path.exists() {
            config::StudioConfig::load(&config_path)?
        } else {
            config::StudioConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// The file-backed content store for this studio directory
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.base_dir)
    }

    /// Directory served under /assets
    pub fn assets_dir(&self) -> std::path::PathBuf {
        self.base_dir.join(&self.config.assets_dir)
    }
}
