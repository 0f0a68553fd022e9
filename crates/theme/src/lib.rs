//! Colour theme for BitWorks.
//!
//! The built-in palette imitates a green phosphor monitor; a TOML theme file
//! can replace it.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::{load_theme, load_theme_from_str};

use std::path::Path;

/// Resolve the theme to use: the file when given and valid, the retro
/// palette otherwise. Returns the error text for the caller to log.
pub fn resolve_theme(theme_file: Option<&Path>) -> (Theme, Option<String>) {
    match theme_file {
        Some(path) => match load_theme(path) {
            Ok(theme) => (theme, None),
            Err(e) => (
                Theme::retro(),
                Some(format!("Failed to load theme {}: {}", path.display(), e)),
            ),
        },
        None => (Theme::retro(), None),
    }
}
