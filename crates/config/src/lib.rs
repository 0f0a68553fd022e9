//! Configuration management for BitWorks.
//!
//! Loads and saves the TOML configuration under the XDG config directory,
//! filling in defaults for every missing key.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{
    Config, EditorSettings, GeneralSettings, KeyboardSettings, LoggingSettings, WorkspaceSettings,
};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default values as constants
pub mod defaults {
    pub const SHOW_BOOT: bool = true;
    pub const BOOT_LINE_INTERVAL_MS: u64 = 700;
    pub const SYSTEM_CLIPBOARD: bool = false;
    pub const READ_ONLY_PREFIXES: &[&str] = &["readonly_", "sys_"];
    pub const KEY_REPEAT: bool = true;
    pub const INITIAL_DELAY_MS: u64 = 400;
    pub const REPEAT_INTERVAL_MS: u64 = 50;
    pub const FRAME_RATE: u32 = 30;
    pub const WORKSPACE_DIR: &str = ".";
    pub const EXTENSIONS: &[&str] = &["txt", "md"];
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 500;
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates the file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file.
    ///
    /// Missing keys are filled with defaults and the normalized content is
    /// written back when it differs from what was on disk.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(config_path)?;
        }

        Ok(config)
    }

    /// Save configuration to the XDG config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Resolve the log file: explicit setting, else the cache directory,
    /// else the system temp directory.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(ref path) = self.logging.file_path {
            return PathBuf::from(path);
        }
        get_cache_dir()
            .map(|dir| dir.join(constants::LOG_FILE_NAME))
            .unwrap_or_else(|_| std::env::temp_dir().join(constants::LOG_FILE_NAME))
    }
}

impl GeneralSettings {
    pub fn boot_line_interval(&self) -> Duration {
        Duration::from_millis(self.boot_line_interval_ms)
    }
}

impl KeyboardSettings {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }

    /// Duration of one frame; a zero frame rate is treated as 1 fps.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
