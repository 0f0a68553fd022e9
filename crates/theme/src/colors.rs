//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// The theme uses a minimal 10-color palette:
/// - 2 base colors (bg, fg)
/// - 2 accented colors (accented_bg, accented_fg)
/// - 2 selection colors (selected_bg, selected_fg)
/// - 1 disabled color
/// - 3 semantic colors (success, warning, error)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Base (2 colors) ===
    /// Panel backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,

    // === Accented (2 colors) ===
    /// Menu bar, status bar, dropdown background
    pub accented_bg: Color,
    /// Focused borders, menu key labels
    pub accented_fg: Color,

    // === Selection (2 colors) ===
    /// Text selection, highlighted list row, highlighted menu item
    pub selected_bg: Color,
    /// Text on selected background
    pub selected_fg: Color,

    // === Disabled (1 color) ===
    /// Unfocused borders, read messages, secondary text
    pub disabled: Color,

    // === Semantic (3 colors) ===
    /// Info status messages
    pub success: Color,
    /// Read-only and modified markers
    pub warning: Color,
    /// Error status messages
    pub error: Color,
}

impl Theme {
    /// Green-on-black phosphor palette.
    pub const fn retro() -> Self {
        Self {
            name: "retro",
            bg: Color::Black,
            fg: Color::Rgb(0, 255, 0),
            accented_bg: Color::Rgb(0, 60, 0),
            accented_fg: Color::LightGreen,
            selected_bg: Color::Rgb(0, 160, 0),
            selected_fg: Color::Black,
            disabled: Color::Rgb(50, 110, 50),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::retro()
    }
}
