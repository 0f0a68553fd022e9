//! Boot screen rendering.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use bitworks_theme::Theme;

/// Left margin of the BIOS text.
const MARGIN_X: u16 = 2;

/// Draw the revealed boot lines on a blank screen, with a block cursor
/// after the last one.
pub fn render_boot_screen(buf: &mut Buffer, area: Rect, lines: &[&str], theme: &Theme) {
    let style = Style::default().fg(theme.fg).bg(theme.bg);
    buf.set_style(area, style);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_symbol(" ");
        }
    }

    let top = area.y + 1;
    let width = area.width.saturating_sub(MARGIN_X) as usize;
    for (i, line) in lines.iter().enumerate() {
        let y = top + i as u16;
        if y >= area.bottom() {
            break;
        }
        buf.set_stringn(area.x + MARGIN_X, y, line, width, style);
    }

    let cursor_y = top + lines.len() as u16;
    if cursor_y < area.bottom() && area.width > MARGIN_X {
        buf.set_string(area.x + MARGIN_X, cursor_y, "_", style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_lines_are_drawn() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);

        render_boot_screen(&mut buf, area, &["JackROM BIOS", "", "640 KB OK"], &theme);

        let row = |y: u16| -> String { (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(1).starts_with("  JackROM BIOS"));
        assert!(row(3).starts_with("  640 KB OK"));
        assert!(row(4).starts_with("  _"));
        assert_eq!(buf[(2, 1)].fg, theme.fg);
    }
}
