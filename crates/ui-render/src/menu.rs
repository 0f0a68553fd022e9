//! Menu bar and dropdown rendering.

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use bitworks_theme::Theme;

/// Gap between menu bar captions.
const CAPTION_GAP: u16 = 4;

/// Parameters for rendering the menu bar.
pub struct MenuBarParams<'a> {
    pub theme: &'a Theme,
    /// Captions such as "F1-File", left to right
    pub captions: &'a [String],
    /// Index of the open menu, if any
    pub open: Option<usize>,
}

/// X offset of each caption relative to the bar start.
pub fn caption_positions(captions: &[String]) -> Vec<u16> {
    let mut x = 1;
    captions
        .iter()
        .map(|caption| {
            let pos = x;
            x += caption.width() as u16 + CAPTION_GAP;
            pos
        })
        .collect()
}

/// Render the top menu bar with a clock on the right.
pub fn render_menu_bar(buf: &mut Buffer, area: Rect, params: &MenuBarParams) {
    if area.height == 0 {
        return;
    }
    let theme = params.theme;
    let bar_style = Style::default().fg(theme.fg).bg(theme.accented_bg);
    buf.set_style(area, bar_style);

    for (i, (caption, x)) in params
        .captions
        .iter()
        .zip(caption_positions(params.captions))
        .enumerate()
    {
        if x >= area.width {
            break;
        }
        let style = if params.open == Some(i) {
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            bar_style.add_modifier(Modifier::BOLD)
        };
        buf.set_stringn(
            area.x + x,
            area.y,
            caption,
            (area.width - x) as usize,
            style,
        );
    }

    let clock = format!(" {} ", Local::now().format("%H:%M"));
    let clock_width = clock.width() as u16;
    if area.width > clock_width + 20 {
        buf.set_string(area.right() - clock_width, area.y, clock, bar_style);
    }
}

/// Render an open dropdown below its caption.
///
/// `items` are full row labels ("F1-New"); `bounds` limits the box to the
/// screen.
pub fn render_dropdown(
    buf: &mut Buffer,
    anchor: (u16, u16),
    items: &[String],
    highlighted: usize,
    theme: &Theme,
    bounds: Rect,
) {
    let inner_width = items.iter().map(|i| i.width()).max().unwrap_or(0) as u16 + 2;
    let area = Rect::new(anchor.0, anchor.1, inner_width + 2, items.len() as u16 + 2)
        .intersection(bounds);
    if area.width < 3 || area.height < 3 {
        return;
    }

    let border_style = Style::default().fg(theme.accented_fg).bg(theme.accented_bg);
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.accented_bg));
    let inner = block.inner(area);
    block.render(area, buf);

    for (row, item) in items.iter().enumerate().take(inner.height as usize) {
        let style = if row == highlighted {
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg).bg(theme.accented_bg)
        };
        let y = inner.y + row as u16;
        buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
        buf.set_stringn(inner.x + 1, y, item, inner.width.saturating_sub(1) as usize, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_caption_positions() {
        let captions = vec!["F1-File".to_string(), "F2-Edit".to_string()];
        assert_eq!(caption_positions(&captions), vec![1, 12]);
    }

    #[test]
    fn test_menu_bar_marks_open_menu() {
        let theme = Theme::default();
        let captions = vec!["F1-File".to_string(), "F2-Edit".to_string()];
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        render_menu_bar(
            &mut buf,
            area,
            &MenuBarParams {
                theme: &theme,
                captions: &captions,
                open: Some(1),
            },
        );

        assert!(row(&buf, 0, 30).starts_with(" F1-File    F2-Edit"));
        assert_eq!(buf[(12, 0)].bg, theme.selected_bg);
        assert_eq!(buf[(1, 0)].bg, theme.accented_bg);
    }

    #[test]
    fn test_dropdown_lists_items() {
        let theme = Theme::default();
        let items = vec!["F1-Cut".to_string(), "F2-Copy".to_string()];
        let bounds = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(bounds);

        render_dropdown(&mut buf, (2, 1), &items, 1, &theme, bounds);

        assert!(row(&buf, 2, 20).contains("F1-Cut"));
        assert!(row(&buf, 3, 20).contains("F2-Copy"));
        assert_eq!(buf[(4, 3)].bg, theme.selected_bg);
        assert_eq!(buf[(4, 2)].bg, theme.accented_bg);
    }
}
