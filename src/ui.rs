use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use bitworks_app::{Focus, FocusState, Overlay, PanelId, Panels, RenderParts, MENUS};
use bitworks_panel_editor::Editor;
use bitworks_theme::Theme;
use bitworks_ui_render::{
    caption_positions, render_boot_screen, render_dropdown, render_menu_bar, render_modal_frame,
    render_panel, MenuBarParams, StatusBar, StatusBarParams,
};

/// Render one frame: the boot screen while it runs, the IDE afterwards.
pub fn render(frame: &mut Frame<'_>, parts: RenderParts<'_>) {
    let RenderParts {
        state,
        focus,
        panels,
        boot,
    } = parts;
    let size = frame.area();
    let theme = &state.theme;

    // Set application background
    let background = Block::default().style(Style::default().bg(theme.bg).fg(theme.fg));
    frame.render_widget(background, size);

    if let Some(boot) = boot {
        render_boot_screen(frame.buffer_mut(), size, boot.visible_lines(), theme);
        return;
    }

    // Split screen into menu (1 line), main area, and status bar (1 line)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let captions: Vec<String> = MENUS.iter().map(|menu| menu.caption()).collect();
    let open_menu = focus.open_menu_state();
    render_menu_bar(
        frame.buffer_mut(),
        main_chunks[0],
        &MenuBarParams {
            theme,
            captions: &captions,
            open: open_menu.and_then(|(id, _)| MENUS.iter().position(|m| *m == id)),
        },
    );

    render_panels(frame, main_chunks[1], panels, focused_panel(focus), theme);

    let focus_label = focus_label(focus.focus());
    let status = state.status.as_ref();
    StatusBar::render(
        frame.buffer_mut(),
        main_chunks[2],
        &status_params(
            &panels.editor,
            theme,
            &focus_label,
            status.map(|s| (s.text.as_str(), s.is_error)),
        ),
    );

    if let Some((id, highlighted)) = open_menu {
        let index = MENUS.iter().position(|m| *m == id).unwrap_or(0);
        let x = caption_positions(&captions)
            .get(index)
            .copied()
            .unwrap_or(1);
        render_dropdown(
            frame.buffer_mut(),
            (main_chunks[0].x + x.saturating_sub(1), main_chunks[0].y + 1),
            &id.item_captions(),
            highlighted,
            theme,
            size,
        );
    }

    render_email_modal(frame, size, focus, theme);
}

/// Editor on the left, file list above the inbox on the right.
fn render_panels(
    frame: &mut Frame<'_>,
    area: Rect,
    panels: &mut Panels,
    focused: Option<PanelId>,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let buf = frame.buffer_mut();
    render_panel(
        &mut panels.editor,
        columns[0],
        buf,
        focused == Some(PanelId::Editor),
        theme,
    );
    render_panel(
        &mut panels.file_list,
        side[0],
        buf,
        focused == Some(PanelId::FileList),
        theme,
    );
    render_panel(
        &mut panels.inbox,
        side[1],
        buf,
        focused == Some(PanelId::Inbox),
        theme,
    );
}

fn render_email_modal(frame: &mut Frame<'_>, screen: Rect, focus: &mut FocusState, theme: &Theme) {
    if let Some(Overlay::EmailModal(modal)) = focus.overlay_mut() {
        let inner = render_modal_frame(frame.buffer_mut(), screen, &modal.title(), theme);
        modal.render(inner, frame.buffer_mut(), theme);
    }
}

/// Panels draw as focused only while no overlay holds the keyboard.
fn focused_panel(focus: &FocusState) -> Option<PanelId> {
    match focus.focus() {
        Focus::Panel(id) => Some(id),
        _ => None,
    }
}

fn focus_label(focus: Focus) -> String {
    match focus {
        Focus::Panel(PanelId::Editor) => "Editor".to_string(),
        Focus::Panel(PanelId::FileList) => "Files".to_string(),
        Focus::Panel(PanelId::Inbox) => "Inbox".to_string(),
        Focus::Menu(id) => format!("{} menu", id.label()),
        Focus::EmailModal => "Mail".to_string(),
    }
}

fn status_params<'a>(
    editor: &'a Editor,
    theme: &'a Theme,
    focus: &'a str,
    message: Option<(&'a str, bool)>,
) -> StatusBarParams<'a> {
    let document = editor.document();
    let cursor = editor.cursor();
    StatusBarParams {
        theme,
        focus,
        document: document.title(),
        read_only: document.read_only,
        modified: document.modified,
        cursor: (cursor.line + 1, cursor.column + 1),
        message,
    }
}
