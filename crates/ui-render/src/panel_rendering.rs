//! Panel frame rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use bitworks_core::{Panel, RenderContext};
use bitworks_theme::Theme;

/// Render a panel inside a titled border.
///
/// The focused panel gets the accent colour, the others are dimmed.
pub fn render_panel(
    panel: &mut dyn Panel,
    area: Rect,
    buf: &mut Buffer,
    is_focused: bool,
    theme: &Theme,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let style = if is_focused {
        Style::default()
            .fg(theme.accented_fg)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled).bg(theme.bg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(format!(" {} ", panel.title()), style));

    let inner = block.inner(area);
    block.render(area, buf);

    // Clear inner area before rendering content
    let clear_style = Style::default().bg(theme.bg);
    for y in inner.y..inner.y + inner.height {
        for x in inner.x..inner.x + inner.width {
            buf[(x, y)].reset();
            buf[(x, y)].set_style(clear_style);
        }
    }

    let ctx = RenderContext { theme, is_focused };
    panel.render(inner, buf, &ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitworks_core::PanelEvent;
    use crossterm::event::KeyEvent;

    /// Panel that records the area it was asked to draw into.
    struct DummyPanel {
        rendered: Option<(Rect, bool)>,
    }

    impl Panel for DummyPanel {
        fn name(&self) -> &'static str {
            "dummy"
        }

        fn title(&self) -> String {
            "Dummy".to_string()
        }

        fn render(&mut self, area: Rect, _buf: &mut Buffer, ctx: &RenderContext) {
            self.rendered = Some((area, ctx.is_focused));
        }

        fn handle_key(&mut self, _key: KeyEvent) -> Vec<PanelEvent> {
            Vec::new()
        }
    }

    #[test]
    fn test_panel_gets_inner_area_and_title() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut panel = DummyPanel { rendered: None };

        render_panel(&mut panel, area, &mut buf, true, &theme);

        assert_eq!(panel.rendered, Some((Rect::new(1, 1, 18, 3), true)));
        let top: String = (0..20).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains(" Dummy "));
        assert_eq!(buf[(0, 1)].fg, theme.accented_fg);
    }
}
