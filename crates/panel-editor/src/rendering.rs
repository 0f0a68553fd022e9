//! Editor content rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use bitworks_buffer::{Cursor, LineBuffer, Viewport};
use bitworks_theme::Theme;

/// Display width of the first `column` graphemes of `line`.
pub(crate) fn display_column(line: &str, column: usize) -> usize {
    line.graphemes(true).take(column).map(|g| g.width()).sum()
}

/// First display column to draw so that `cursor_x` fits in `width`.
pub(crate) fn horizontal_offset(cursor_x: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    (cursor_x + 1).saturating_sub(width)
}

/// Draw the visible lines with the selection highlighted.
pub(crate) fn render_content(
    buf: &mut Buffer,
    area: Rect,
    buffer: &LineBuffer,
    viewport: &Viewport,
    selection: Option<(Cursor, Cursor)>,
    left_column: usize,
    theme: &Theme,
) {
    let text_style = Style::default().fg(theme.fg).bg(theme.bg);
    let selected_style = Style::default().fg(theme.selected_fg).bg(theme.selected_bg);
    let width = area.width as usize;

    for (screen_row, line_idx) in viewport.visible_range(buffer.line_count()).enumerate() {
        if screen_row >= area.height as usize {
            break;
        }
        let y = area.y + screen_row as u16;
        let mut x = 0;

        for (column, grapheme) in buffer.line(line_idx).graphemes(true).enumerate() {
            let grapheme_width = grapheme.width();
            if x < left_column {
                x += grapheme_width;
                continue;
            }
            let screen_x = x - left_column;
            if screen_x + grapheme_width > width {
                break;
            }

            let pos = Cursor::at(line_idx, column);
            let is_selected = selection.is_some_and(|(start, end)| pos >= start && pos < end);
            let style = if is_selected {
                selected_style
            } else {
                text_style
            };
            buf.set_string(area.x + screen_x as u16, y, grapheme, style);
            x += grapheme_width;
        }
    }
}

/// Render cursor by inverting cell colors at the given position.
///
/// Swaps foreground and background colors with fallback to theme colors.
/// Adds BOLD modifier for better visibility.
pub(crate) fn render_cursor_at(buf: &mut Buffer, x: u16, y: u16, area: Rect, theme: &Theme) {
    if x < area.x + area.width && y < area.y + area.height {
        if let Some(cell) = buf.cell_mut((x, y)) {
            let current_fg = match cell.fg {
                Color::Reset => theme.fg,
                color => color,
            };
            let current_bg = match cell.bg {
                Color::Reset => theme.bg,
                color => color,
            };
            cell.set_style(
                Style::default()
                    .bg(current_fg)
                    .fg(current_bg)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}
