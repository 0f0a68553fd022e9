//! Theme loading from TOML files.

use anyhow::Result;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::Theme;

/// Color representation in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Color {
        match self {
            TomlColor::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                _ => Color::White,
            },
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        }
    }
}

/// TOML theme colors structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    selected_bg: TomlColor,
    selected_fg: TomlColor,
    disabled: TomlColor,
    success: TomlColor,
    warning: TomlColor,
    error: TomlColor,
}

/// TOML theme structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

/// Load theme from TOML file.
///
/// Returns the parsed theme with a leaked static name string.
pub fn load_theme(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path)?;
    load_theme_from_str(&content)
}

/// Load theme from TOML content.
pub fn load_theme_from_str(content: &str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;

    // Themes are loaded once per process
    let name: &'static str = Box::leak(toml_theme.name.into_boxed_str());
    let colors = toml_theme.colors;

    Ok(Theme {
        name,
        bg: colors.bg.to_color(),
        fg: colors.fg.to_color(),
        accented_bg: colors.accented_bg.to_color(),
        accented_fg: colors.accented_fg.to_color(),
        selected_bg: colors.selected_bg.to_color(),
        selected_fg: colors.selected_fg.to_color(),
        disabled: colors.disabled.to_color(),
        success: colors.success.to_color(),
        warning: colors.warning.to_color(),
        error: colors.error.to_color(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMBER: &str = r#"
name = "amber"

[colors]
bg = "Black"
fg = { rgb = [255, 176, 0] }
accented_bg = { rgb = [60, 40, 0] }
accented_fg = "LightYellow"
selected_bg = { rgb = [255, 176, 0] }
selected_fg = "Black"
disabled = "DarkGray"
success = "Green"
warning = "Yellow"
error = "Red"
"#;

    #[test]
    fn test_load_theme_from_str() {
        let theme = load_theme_from_str(AMBER).unwrap();
        assert_eq!(theme.name, "amber");
        assert_eq!(theme.fg, Color::Rgb(255, 176, 0));
        assert_eq!(theme.accented_fg, Color::LightYellow);
    }

    #[test]
    fn test_load_theme_missing_color_fails() {
        let broken = AMBER.replace("error = \"Red\"", "");
        assert!(load_theme_from_str(&broken).is_err());
    }

    #[test]
    fn test_load_theme_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amber.toml");
        std::fs::write(&path, AMBER).unwrap();
        assert_eq!(load_theme(&path).unwrap().name, "amber");
    }
}
