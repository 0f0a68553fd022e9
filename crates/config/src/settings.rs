//! Configuration structures for BitWorks settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Key-repeat and frame timing
    #[serde(default)]
    pub keyboard: KeyboardSettings,

    /// Workspace directory and mailbox
    #[serde(default)]
    pub workspace: WorkspaceSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Optional TOML theme file; the built-in retro palette is used otherwise
    #[serde(default)]
    pub theme_file: Option<String>,

    /// Show the boot screen on startup
    #[serde(default = "default_show_boot")]
    pub show_boot: bool,

    /// Delay between boot screen lines in ms
    #[serde(default = "default_boot_line_interval_ms")]
    pub boot_line_interval_ms: u64,
}

/// Editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Mirror copy/cut into the system clipboard
    #[serde(default = "default_system_clipboard")]
    pub system_clipboard: bool,

    /// File name prefixes that mark a document as protected
    #[serde(default = "default_read_only_prefixes")]
    pub read_only_prefixes: Vec<String>,
}

/// Key-repeat and frame timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardSettings {
    /// Synthesize repeats for held keys (needs key-release reporting)
    #[serde(default = "default_key_repeat")]
    pub key_repeat: bool,

    /// Hold time before the first repeat in ms
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Time between repeats in ms
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,

    /// Target frames per second of the main loop
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

/// Workspace settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    /// Directory listed by the file panel and used for load/save
    #[serde(default = "default_workspace_dir")]
    pub dir: String,

    /// Extensions shown in the file panel (empty shows everything)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Mailbox file for the inbox panel
    #[serde(default)]
    pub mailbox: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Records kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_show_boot() -> bool {
    defaults::SHOW_BOOT
}

fn default_boot_line_interval_ms() -> u64 {
    defaults::BOOT_LINE_INTERVAL_MS
}

fn default_system_clipboard() -> bool {
    defaults::SYSTEM_CLIPBOARD
}

fn default_read_only_prefixes() -> Vec<String> {
    defaults::READ_ONLY_PREFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_key_repeat() -> bool {
    defaults::KEY_REPEAT
}

fn default_initial_delay_ms() -> u64 {
    defaults::INITIAL_DELAY_MS
}

fn default_repeat_interval_ms() -> u64 {
    defaults::REPEAT_INTERVAL_MS
}

fn default_frame_rate() -> u32 {
    defaults::FRAME_RATE
}

fn default_workspace_dir() -> String {
    defaults::WORKSPACE_DIR.to_string()
}

fn default_extensions() -> Vec<String> {
    defaults::EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme_file: None,
            show_boot: default_show_boot(),
            boot_line_interval_ms: default_boot_line_interval_ms(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            system_clipboard: default_system_clipboard(),
            read_only_prefixes: default_read_only_prefixes(),
        }
    }
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            key_repeat: default_key_repeat(),
            initial_delay_ms: default_initial_delay_ms(),
            repeat_interval_ms: default_repeat_interval_ms(),
            frame_rate: default_frame_rate(),
        }
    }
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            dir: default_workspace_dir(),
            extensions: default_extensions(),
            mailbox: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
