//! Process-wide map configuration.
//!
//! Loaded once at startup (or left at its defaults) and read-only afterwards.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::info;
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::{Result, TrailError};

static MAP_CONFIG: OnceLock<MapConfig> = OnceLock::new();

/// Constants shared by every track in a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Trail colors, indexed by track id.
    /// Default: the 16-color trail palette
    pub palette: Palette,

    /// Edge length of the satellite icon in pixels.
    /// Default: 28
    pub icon_size: u32,

    /// Maximum history samples retained per track.
    /// Default: 4
    pub history_capacity: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            icon_size: 28,
            history_capacity: 4,
        }
    }
}

impl MapConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TrailError::Config(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Make this the process-wide configuration.
    ///
    /// Fails if a configuration was already installed, or if [`MapConfig::global`]
    /// was read before any install (which pins the defaults).
    pub fn install(self) -> Result<()> {
        info!(
            "[groundtrack] Installing map config: {} colors, icon {}px, history {}",
            self.palette.len(),
            self.icon_size,
            self.history_capacity
        );
        MAP_CONFIG
            .set(self)
            .map_err(|_| TrailError::ConfigAlreadyInstalled)
    }

    /// The installed configuration, or the defaults if none was installed.
    pub fn global() -> &'static MapConfig {
        MAP_CONFIG.get_or_init(MapConfig::default)
    }
}
