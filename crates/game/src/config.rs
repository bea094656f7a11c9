//! Game configuration (window, graphics, world seed). Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stars beyond this are almost certainly a typo.
const MAX_STARS: usize = 100_000;

/// Startup settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Enable vsync (recommended to avoid tearing).
    #[serde(default = "default_true")]
    pub vsync: bool,
    /// Seeds terrain and starfield generation.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_star_count")]
    pub star_count: usize,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_true() -> bool {
    true
}
fn default_seed() -> u64 {
    42
}
fn default_star_count() -> usize {
    300
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            vsync: default_true(),
            seed: default_seed(),
            star_count: default_star_count(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            Err(_) => {
                log::debug!("No config at {:?}, using defaults", path);
                Self::default()
            }
        }
    }

    /// Parse and validate RON text.
    pub fn parse(data: &str) -> anyhow::Result<Self> {
        let config: Self = ron::from_str(data)?;
        if config.window_width == 0 || config.window_height == 0 {
            anyhow::bail!(
                "window size must be non-zero, got {}x{}",
                config.window_width,
                config.window_height
            );
        }
        if config.star_count > MAX_STARS {
            anyhow::bail!("star_count {} exceeds {}", config.star_count, MAX_STARS);
        }
        Ok(config)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}
