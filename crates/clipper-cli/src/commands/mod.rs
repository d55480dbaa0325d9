//! Subcommand implementations.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod demo;

use std::path::{Path, PathBuf};

use tracing::debug;

use clipper_core::ClipperConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clipper")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ClipperConfig> {
    if let Some(path) = config_path {
        return Ok(ClipperConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(ClipperConfig::from_file(&default_path)?)
    } else {
        Ok(ClipperConfig::default())
    }
}
