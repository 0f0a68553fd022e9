mod ui;

use anyhow::Result;
use crossterm::{
    event::{PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

use bitworks_app::App;
use bitworks_config::Config;
use bitworks_keyboard::enhancement_flags;
use bitworks_logger::{self as logger, LogLevel};
use bitworks_theme::resolve_theme;

fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let min_level = config
        .logging
        .min_level
        .parse::<LogLevel>()
        .unwrap_or(LogLevel::Info);
    logger::init(
        Some(config.log_file_path()),
        config.logging.max_entries,
        min_level,
    );
    if let Some(e) = config_error {
        logger::warn(format!("Using default configuration: {:#}", e));
    }

    let (theme, theme_error) = resolve_theme(config.general.theme_file.as_deref().map(Path::new));
    if let Some(e) = theme_error {
        logger::warn(e);
    }

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Key releases are only reported with the kitty keyboard protocol;
    // without them held keys cannot be tracked
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    execute!(stdout, EnterAlternateScreen)?;

    if keyboard_enhanced {
        execute!(stdout, PushKeyboardEnhancementFlags(enhancement_flags()))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, theme);
    app.set_release_reporting(keyboard_enhanced);

    let result = app.run(&mut terminal, ui::render);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        logger::error(format!("{:#}", err));
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
