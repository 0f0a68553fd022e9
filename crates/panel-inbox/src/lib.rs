//! Inbox panel for BitWorks.
//!
//! Lists email records; Enter asks the application to open the highlighted
//! one, which marks it read and shows it in an [`EmailModal`].

mod mailbox;
mod modal;

pub use mailbox::{load_mailbox, parse_mailbox, welcome_mailbox, EmailRecord};
pub use modal::{EmailModal, ModalOutcome};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use bitworks_core::{fit_to_width, ListState, Panel, PanelEvent, RenderContext};

/// Inbox panel
#[derive(Debug, Default)]
pub struct Inbox {
    records: Vec<EmailRecord>,
    list: ListState,
}

impl Inbox {
    pub fn new(records: Vec<EmailRecord>) -> Self {
        Self {
            records,
            list: ListState::new(),
        }
    }

    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    pub fn selected(&self) -> usize {
        self.list.selected()
    }

    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|r| !r.read).count()
    }

    /// Mark the email at `index` read and build its viewer.
    pub fn open(&mut self, index: usize) -> Option<EmailModal> {
        let record = self.records.get_mut(index)?;
        record.read = true;
        Some(EmailModal::new(index, record.clone()))
    }

    /// One list row: unread marker, sender, subject and date.
    fn row_text(record: &EmailRecord) -> String {
        let marker = if record.read { ' ' } else { '*' };
        format!(
            "{} {:<20} {}  {}",
            marker, record.sender, record.subject, record.date
        )
    }
}

impl Panel for Inbox {
    fn name(&self) -> &'static str {
        "inbox"
    }

    fn title(&self) -> String {
        match self.unread_count() {
            0 => "Inbox".to_string(),
            unread => format!("Inbox ({} unread)", unread),
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        let theme = ctx.theme;
        let width = area.width as usize;
        self.list
            .set_max_visible(area.height as usize, self.records.len());

        if self.records.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                fit_to_width("(no messages)", width),
                Style::default().fg(theme.disabled).bg(theme.bg),
            );
            return;
        }

        let range = self.list.viewport().visible_range(self.records.len());
        for (row, index) in range.enumerate() {
            if row >= area.height as usize {
                break;
            }
            let record = &self.records[index];
            let mut style = Style::default().fg(theme.fg).bg(theme.bg);
            if !record.read {
                style = style.add_modifier(Modifier::BOLD);
            }
            if index == self.list.selected() {
                style = if ctx.is_focused {
                    style.fg(theme.selected_fg).bg(theme.selected_bg)
                } else {
                    style.fg(theme.accented_fg)
                };
            }
            buf.set_string(
                area.x,
                area.y + row as u16,
                fit_to_width(&Self::row_text(record), width),
                style,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent> {
        if self.list.handle_navigation(&key, self.records.len()) {
            return Vec::new();
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => {
                if self.records.is_empty() {
                    vec![PanelEvent::info("Inbox is empty")]
                } else {
                    vec![PanelEvent::OpenEmail(self.list.selected())]
                }
            }
            _ => Vec::new(),
        }
    }
}
