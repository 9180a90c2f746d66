//! Configuration management
//!
//! Persists the player's preferred wheel and the UI frame rate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::wheel::Variant;

const DEFAULT_TICK_RATE_MS: u64 = 33;
const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 250;

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Wheel shown on startup
    #[serde(default)]
    pub variant: Variant,

    /// Milliseconds between animation frames
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| {
                let config_dir = dirs.config_dir().join("fortune-wheel");
                fs::create_dir_all(&config_dir).ok();
                config_dir.join("config.json")
            })
            .unwrap_or_else(|| std::env::temp_dir().join("fortune-wheel-config.json"))
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!("Failed to parse config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse configuration JSON, filling in missing fields
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Save configuration to file
    pub fn save(&self) {
        let path = Self::config_path();

        match serde_json::to_string_pretty(self) {
            Ok(contents) => {
                if let Err(e) = fs::write(&path, contents) {
                    log::warn!("Failed to save config: {}", e);
                } else {
                    log::debug!("Saved config to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize config: {}", e);
            }
        }
    }

    /// Frame interval, clamped to a sane range
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS))
    }
}
