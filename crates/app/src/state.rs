//! Application state shared by the key handlers and the renderer.

use bitworks_config::Config;
use bitworks_theme::Theme;

/// Status bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// Current theme
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Last info or error message, shown until the next key press
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            should_quit: false,
            theme,
            config,
            status: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    /// Show an error; errors are logged as well.
    pub fn set_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        bitworks_logger::error(text.clone());
        self.status = Some(StatusMessage {
            text,
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
