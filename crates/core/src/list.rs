//! Highlighted-row navigation shared by the list panels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use unicode_width::UnicodeWidthChar;

use bitworks_buffer::Viewport;

/// Cut `text` to at most `width` display columns and pad it to exactly
/// `width` so highlighted rows span the whole panel.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

/// Highlighted index plus the viewport that keeps it on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    selected: usize,
    viewport: Viewport,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted row; meaningless while the list is empty.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Highlight `index`, clamped to `len`.
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
        self.viewport.ensure_cursor_visible(self.selected, len);
    }

    /// Adopt the rendered height and keep the highlight visible.
    pub fn set_max_visible(&mut self, lines: usize, len: usize) {
        self.viewport.set_max_visible(lines);
        self.select(self.selected, len);
    }

    /// Move the highlight for a navigation key.
    ///
    /// Returns false when the key is not a list navigation key.
    pub fn handle_navigation(&mut self, key: &KeyEvent, len: usize) -> bool {
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return false;
        }
        let step = self.viewport.page_step();
        let target = match key.code {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => self.selected + 1,
            KeyCode::PageUp => self.selected.saturating_sub(step),
            KeyCode::PageDown => self.selected + step,
            KeyCode::Home => 0,
            KeyCode::End => len.saturating_sub(1),
            _ => return false,
        };
        self.select(target, len);
        true
    }
}
