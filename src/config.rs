//! Configuration loading and defaults for mon.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration for mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause after every action in seconds (default: 5).
    pub action_interval_seconds: u64,

    /// Per-axis bound for random cursor offsets in pixels (default: 50).
    pub max_offset: u32,

    /// How long a cursor glide takes in milliseconds (default: 200).
    pub move_duration_ms: u64,

    /// Waypoints per second during a glide (default: 60).
    pub move_fps: u32,

    /// Type random characters during active phases (default: false).
    pub keystrokes: bool,

    /// Dry run mode: log actions instead of injecting input.
    pub dry_run: bool,

    /// Fixed seed for the random source.
    /// If unset, the generator is seeded from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            action_interval_seconds: 5,
            max_offset: 50,
            move_duration_ms: 200,
            move_fps: crate::motion::DEFAULT_FPS,
            keystrokes: false,
            dry_run: false,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from the default path, or return defaults if not found.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load(p);
        }

        if let Some(default_path) = Self::default_path()
            && default_path.exists()
        {
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }

    /// Default config location: `$XDG_CONFIG_HOME/mon/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mon").join("config.toml"))
    }

    pub fn action_interval(&self) -> Duration {
        Duration::from_secs(self.action_interval_seconds)
    }

    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }
}
