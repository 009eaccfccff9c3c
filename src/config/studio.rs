//! Studio configuration (studio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main studio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    // Site
    pub title: String,
    pub language: String,

    // Server
    pub host: String,
    pub port: u16,

    // Directories
    pub assets_dir: String,

    /// Period at which the public page re-reads the persisted slot, in
    /// milliseconds
    pub poll_interval_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "F.STUDIO by MARIA MOROZOVA".to_string(),
            language: "ru".to_string(),

            host: "localhost".to_string(),
            port: 4000,

            assets_dir: "assets".to_string(),

            poll_interval_ms: 1000,
        }
    }
}

impl StudioConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: StudioConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
