//! Centered modal frame.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};

use bitworks_theme::Theme;

/// Share of the screen a modal takes, in percent.
const MODAL_PERCENT: u16 = 80;

fn percent_of(len: u16) -> u16 {
    (u32::from(len) * u32::from(MODAL_PERCENT) / 100) as u16
}

/// Clear a centered box, draw its border and title, and return the inner
/// area for the content.
pub fn render_modal_frame(buf: &mut Buffer, screen: Rect, title: &str, theme: &Theme) -> Rect {
    let width = percent_of(screen.width).max(screen.width.min(20));
    let height = percent_of(screen.height).max(screen.height.min(8));
    let area = Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    );

    let style = Style::default()
        .fg(theme.accented_fg)
        .bg(theme.bg)
        .add_modifier(Modifier::BOLD);

    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .style(Style::default().bg(theme.bg))
        .title(Span::styled(format!(" {} ", title), style))
        .title_bottom(Span::styled(" Arrows/PgUp/PgDn scroll, any other key closes ", style));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}
