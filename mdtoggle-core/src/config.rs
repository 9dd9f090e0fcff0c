//! Configuration management for mdtoggle

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TIP: &str = "(enter text here)";
pub const DEFAULT_IMAGE_TIP: &str = "(enter image description here)";

/// Placeholder text used when a command inserts a new block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placeholder for emphasis, headers, lists, quotes and link text
    pub tip: String,
    /// Placeholder for image alt text
    pub image_tip: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tip: DEFAULT_TIP.to_string(),
            image_tip: DEFAULT_IMAGE_TIP.to_string(),
        }
    }
}

impl Config {
    /// Get the platform-specific config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdtoggle")
            .map(|proj_dirs| proj_dirs.config_dir().join("mdtoggle.toml"))
    }

    /// Load configuration from the platform config file, falling back to
    /// defaults if it does not exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        // Check config file permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path)
                .with_context(|| format!("Failed to stat config file: {}", path.display()))?;
            if metadata.permissions().mode() & 0o002 != 0 {
                anyhow::bail!(
                    "Config file {} is world-writable (insecure permissions)",
                    path.display()
                );
            }
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
