//! Status bar at the bottom of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use bitworks_theme::Theme;

/// Status bar rendering parameters (extracted from the app state to avoid
/// cyclic deps)
pub struct StatusBarParams<'a> {
    pub theme: &'a Theme,
    /// Name of the focused panel or overlay
    pub focus: &'a str,
    /// Document name shown for the editor
    pub document: &'a str,
    pub read_only: bool,
    pub modified: bool,
    /// Cursor as 1-based (row, column)
    pub cursor: (usize, usize),
    /// Status message (message, is_error)
    pub message: Option<(&'a str, bool)>,
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    /// Render status bar
    pub fn render(buf: &mut Buffer, area: Rect, params: &StatusBarParams<'_>) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(params.theme.accented_bg));
        Line::from(Self::spans(params)).render(area, buf);
    }

    /// Document info first, then the message
    fn spans<'a>(params: &'a StatusBarParams<'a>) -> Vec<Span<'a>> {
        let theme = params.theme;
        let base_style = Style::default().fg(theme.fg).bg(theme.accented_bg);
        let highlight_style = Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(format!(" [{}] ", params.focus), highlight_style),
            Span::styled(params.document, base_style),
        ];
        if params.read_only {
            spans.push(Span::styled(
                " [RO]",
                Style::default().fg(theme.warning).bg(theme.accented_bg),
            ));
        }
        if params.modified {
            spans.push(Span::styled(" *", highlight_style));
        }
        spans.push(Span::styled(
            format!("  {}:{}", params.cursor.0, params.cursor.1),
            base_style,
        ));

        if let Some((message, is_error)) = params.message {
            let style = if is_error {
                Style::default()
                    .fg(theme.error)
                    .bg(theme.accented_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.success).bg(theme.accented_bg)
            };
            spans.push(Span::styled(format!("  {}", message), style));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params<'a>(theme: &'a Theme, message: Option<(&'a str, bool)>) -> StatusBarParams<'a> {
        StatusBarParams {
            theme,
            focus: "Editor",
            document: "notes.txt",
            read_only: true,
            modified: true,
            cursor: (3, 7),
            message,
        }
    }

    fn text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_document_info() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::render(&mut buf, area, &params(&theme, None));
        assert!(text(&buf, 60).starts_with(" [Editor] notes.txt [RO] *  3:7"));
    }

    #[test]
    fn test_error_message_style() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::render(
            &mut buf,
            area,
            &params(&theme, Some(("Error: document is read-only", true))),
        );
        let line = text(&buf, 80);
        let pos = line.find("Error:").unwrap();
        assert_eq!(buf[(pos as u16, 0)].fg, theme.error);
    }
}
