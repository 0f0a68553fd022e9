//! Modal viewer for a single email.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use bitworks_buffer::{wrap_text, ScrollDirection, Viewport};
use bitworks_core::fit_to_width;
use bitworks_theme::Theme;

use crate::EmailRecord;

/// Width used for wrapping before the first render.
const DEFAULT_WRAP_WIDTH: usize = 60;

/// Rows taken by the header (From, Date, Subject, separator).
const HEADER_ROWS: u16 = 4;

/// What the modal did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    /// Navigation key consumed; the modal stays open
    Scrolled,
    /// Any other key; the modal should close
    Close,
}

/// Open email with its body wrapped to the modal width.
#[derive(Debug, Clone)]
pub struct EmailModal {
    index: usize,
    record: EmailRecord,
    wrap_width: usize,
    lines: Vec<String>,
    viewport: Viewport,
}

impl EmailModal {
    pub fn new(index: usize, record: EmailRecord) -> Self {
        let lines = wrap_text(&record.body, DEFAULT_WRAP_WIDTH);
        Self {
            index,
            record,
            wrap_width: DEFAULT_WRAP_WIDTH,
            lines,
            viewport: Viewport::default(),
        }
    }

    /// Position of the email in the inbox
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record(&self) -> &EmailRecord {
        &self.record
    }

    pub fn title(&self) -> String {
        format!("Mail: {}", self.record.subject)
    }

    /// Wrapped body lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Lines currently inside the viewport
    pub fn visible_lines(&self) -> &[String] {
        &self.lines[self.viewport.visible_range(self.lines.len())]
    }

    /// Re-wrap for a new body size, keeping the scroll offset in range.
    pub fn resize(&mut self, width: usize, height: usize) {
        let width = width.max(1);
        if width != self.wrap_width {
            self.wrap_width = width;
            self.lines = wrap_text(&self.record.body, width);
        }
        self.viewport.set_max_visible(height);
        self.viewport
            .scroll(ScrollDirection::Up, 0, self.lines.len());
    }

    /// Scroll for navigation keys; everything else closes the modal.
    pub fn handle_key(&mut self, key: KeyEvent) -> ModalOutcome {
        let total = self.lines.len();
        let page = self.viewport.page_step();
        match key.code {
            KeyCode::Up => {
                self.viewport.scroll(ScrollDirection::Up, 1, total);
            }
            KeyCode::Down => {
                self.viewport.scroll(ScrollDirection::Down, 1, total);
            }
            KeyCode::PageUp => {
                self.viewport.scroll(ScrollDirection::Up, page, total);
            }
            KeyCode::PageDown => {
                self.viewport.scroll(ScrollDirection::Down, page, total);
            }
            KeyCode::Home => self.viewport.scroll_to_top(),
            KeyCode::End => self.viewport.scroll_to_bottom(total),
            _ => return ModalOutcome::Close,
        }
        ModalOutcome::Scrolled
    }

    /// Draw header and body inside the modal frame.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;
        let header_style = Style::default().fg(theme.accented_fg).bg(theme.bg);
        let body_style = Style::default().fg(theme.fg).bg(theme.bg);

        let header = [
            format!("From:    {}", self.record.sender),
            format!("Date:    {}", self.record.date),
            format!("Subject: {}", self.record.subject),
            "-".repeat(width),
        ];
        for (row, text) in header.iter().enumerate().take(area.height as usize) {
            buf.set_string(
                area.x,
                area.y + row as u16,
                fit_to_width(text, width),
                header_style,
            );
        }

        let body_height = area.height.saturating_sub(HEADER_ROWS);
        self.resize(width, body_height as usize);
        if body_height == 0 {
            return;
        }

        let body_top = area.y + HEADER_ROWS;
        for (row, line) in self.visible_lines().iter().enumerate() {
            buf.set_string(
                area.x,
                body_top + row as u16,
                fit_to_width(line, width),
                body_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn modal_with_lines(count: usize) -> EmailModal {
        let body: Vec<String> = (0..count).map(|i| format!("line {}", i)).collect();
        EmailModal::new(0, EmailRecord::new("a@b", "today", "Test", body.join("\n")))
    }

    #[test]
    fn test_navigation_scrolls_within_bounds() {
        let mut modal = modal_with_lines(20);
        modal.resize(40, 5);

        assert_eq!(modal.handle_key(key(KeyCode::Up)), ModalOutcome::Scrolled);
        assert_eq!(modal.viewport().scroll_offset, 0);

        modal.handle_key(key(KeyCode::PageDown));
        assert_eq!(modal.viewport().scroll_offset, 4);
        modal.handle_key(key(KeyCode::End));
        assert_eq!(modal.viewport().scroll_offset, 15);
        modal.handle_key(key(KeyCode::Down));
        assert_eq!(modal.viewport().scroll_offset, 15);
        assert_eq!(modal.visible_lines().last().unwrap(), "line 19");

        modal.handle_key(key(KeyCode::Home));
        assert_eq!(modal.viewport().scroll_offset, 0);
    }

    #[test]
    fn test_other_keys_close() {
        let mut modal = modal_with_lines(3);
        assert_eq!(modal.handle_key(key(KeyCode::Esc)), ModalOutcome::Close);
        assert_eq!(modal.handle_key(key(KeyCode::Char('q'))), ModalOutcome::Close);
        assert_eq!(modal.handle_key(key(KeyCode::Enter)), ModalOutcome::Close);
    }

    #[test]
    fn test_resize_rewraps_and_clamps() {
        let record = EmailRecord::new("a@b", "today", "Wrap", "one two three four five six");
        let mut modal = EmailModal::new(0, record);
        assert_eq!(modal.lines().len(), 1);

        modal.resize(10, 1);
        assert_eq!(modal.lines(), &["one two", "three four", "five six"]);
        modal.handle_key(key(KeyCode::End));
        assert_eq!(modal.viewport().scroll_offset, 2);

        modal.resize(60, 1);
        assert_eq!(modal.lines().len(), 1);
        assert_eq!(modal.viewport().scroll_offset, 0);
    }

    #[test]
    fn test_render_draws_header_and_body() {
        let mut modal = modal_with_lines(2);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);

        modal.render(area, &mut buf, &theme);
        let row = |y: u16| -> String { (0..20).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(0).starts_with("From:    a@b"));
        assert!(row(3).starts_with("----"));
        assert!(row(4).starts_with("line 0"));
        assert!(row(5).starts_with("line 1"));
    }
}
