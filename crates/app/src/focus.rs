//! Panel and overlay focus state machine.
//!
//! One of the three base panels always owns focus; a menu or the email
//! modal may sit on top of it in the single overlay slot and then receives
//! every key until it is dismissed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use bitworks_panel_inbox::{EmailModal, ModalOutcome};

use crate::menu::{MenuAction, MenuId, MENUS};

/// Base panels, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Editor,
    FileList,
    Inbox,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::Editor, PanelId::FileList, PanelId::Inbox];

    pub fn next(self) -> Self {
        match self {
            PanelId::Editor => PanelId::FileList,
            PanelId::FileList => PanelId::Inbox,
            PanelId::Inbox => PanelId::Editor,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PanelId::Editor => PanelId::Inbox,
            PanelId::FileList => PanelId::Editor,
            PanelId::Inbox => PanelId::FileList,
        }
    }
}

/// Occupant of the overlay slot.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// Open dropdown with its highlighted row
    Menu { id: MenuId, highlighted: usize },
    EmailModal(EmailModal),
}

/// Focus as reported to the rest of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Panel(PanelId),
    Menu(MenuId),
    EmailModal,
}

/// Where a key ended up after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Handled by the state machine itself (focus moved, menu navigated,
    /// modal scrolled or closed, key swallowed by an overlay)
    Consumed,
    /// Perform a menu action; any menu is already closed
    Action(MenuAction),
    /// Deliver the key to this panel
    Panel(PanelId),
}

#[derive(Debug, Clone)]
pub struct FocusState {
    panel: PanelId,
    overlay: Option<Overlay>,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new(PanelId::Editor)
    }
}

impl FocusState {
    pub fn new(panel: PanelId) -> Self {
        Self {
            panel,
            overlay: None,
        }
    }

    /// Base panel, whether or not an overlay covers it
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut Overlay> {
        self.overlay.as_mut()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn focus(&self) -> Focus {
        match &self.overlay {
            Some(Overlay::Menu { id, .. }) => Focus::Menu(*id),
            Some(Overlay::EmailModal(_)) => Focus::EmailModal,
            None => Focus::Panel(self.panel),
        }
    }

    /// Open menu and its highlighted row
    pub fn open_menu_state(&self) -> Option<(MenuId, usize)> {
        match self.overlay {
            Some(Overlay::Menu { id, highlighted }) => Some((id, highlighted)),
            _ => None,
        }
    }

    /// Focus a base panel. Ignored while an overlay is open.
    pub fn focus_panel(&mut self, panel: PanelId) {
        if self.overlay.is_none() {
            self.panel = panel;
        }
    }

    /// Open a dropdown over the current panel.
    pub fn open_menu(&mut self, id: MenuId) {
        self.overlay = Some(Overlay::Menu { id, highlighted: 0 });
    }

    /// Show an email over the inbox.
    pub fn open_email(&mut self, modal: EmailModal) {
        self.panel = PanelId::Inbox;
        self.overlay = Some(Overlay::EmailModal(modal));
    }

    /// Dismiss any overlay, returning focus to the base panel.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Route a key: overlays first, then global keys, then the panel.
    pub fn dispatch(&mut self, key: KeyEvent) -> Dispatch {
        match self.overlay.as_mut() {
            Some(Overlay::Menu { .. }) => self.dispatch_menu(key),
            Some(Overlay::EmailModal(modal)) => {
                if modal.handle_key(key) == ModalOutcome::Close {
                    self.overlay = None;
                    self.panel = PanelId::Inbox;
                }
                Dispatch::Consumed
            }
            None => self.dispatch_base(key),
        }
    }

    fn dispatch_base(&mut self, key: KeyEvent) -> Dispatch {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.panel = self.panel.next();
                Dispatch::Consumed
            }
            (KeyCode::BackTab, _) => {
                self.panel = self.panel.prev();
                Dispatch::Consumed
            }
            (KeyCode::F(n), KeyModifiers::NONE) => match MenuId::from_fkey(n) {
                Some(id) => {
                    self.open_menu(id);
                    Dispatch::Consumed
                }
                None => Dispatch::Panel(self.panel),
            },
            (KeyCode::Char(c), KeyModifiers::CONTROL) => match c.to_ascii_lowercase() {
                'q' => Dispatch::Action(MenuAction::Exit),
                's' => Dispatch::Action(MenuAction::Save),
                'n' => Dispatch::Action(MenuAction::New),
                _ => Dispatch::Panel(self.panel),
            },
            _ => Dispatch::Panel(self.panel),
        }
    }

    fn dispatch_menu(&mut self, key: KeyEvent) -> Dispatch {
        let Some((id, highlighted)) = self.open_menu_state() else {
            return Dispatch::Consumed;
        };
        let items = id.items();

        match key.code {
            KeyCode::Esc => self.close_overlay(),
            KeyCode::Enter => return self.pick(id, highlighted),
            KeyCode::F(n) => return self.pick(id, usize::from(n).wrapping_sub(1)),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(n) = c.to_digit(10) {
                    return self.pick(id, (n as usize).wrapping_sub(1));
                }
            }
            KeyCode::Up => self.highlight(id, (highlighted + items.len() - 1) % items.len()),
            KeyCode::Down => self.highlight(id, (highlighted + 1) % items.len()),
            KeyCode::Left | KeyCode::Right => {
                let pos = MENUS.iter().position(|m| *m == id).unwrap_or(0);
                let next = if key.code == KeyCode::Left {
                    (pos + MENUS.len() - 1) % MENUS.len()
                } else {
                    (pos + 1) % MENUS.len()
                };
                self.open_menu(MENUS[next]);
            }
            _ => {}
        }
        Dispatch::Consumed
    }

    /// Select item `index` of the open menu. An index past the end keeps the
    /// menu open.
    fn pick(&mut self, id: MenuId, index: usize) -> Dispatch {
        match id.items().get(index) {
            Some(action) => {
                self.close_overlay();
                Dispatch::Action(*action)
            }
            None => Dispatch::Consumed,
        }
    }

    fn highlight(&mut self, id: MenuId, index: usize) {
        self.overlay = Some(Overlay::Menu {
            id,
            highlighted: index,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitworks_panel_inbox::EmailRecord;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn modal() -> EmailModal {
        let body: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        EmailModal::new(0, EmailRecord::new("a@b", "d", "s", body.join("\n")))
    }

    #[test]
    fn test_tab_cycles_panels() {
        let mut focus = FocusState::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            assert_eq!(focus.dispatch(key(KeyCode::Tab)), Dispatch::Consumed);
            seen.push(focus.panel());
        }
        assert_eq!(seen, vec![PanelId::FileList, PanelId::Inbox, PanelId::Editor]);

        focus.dispatch(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(focus.panel(), PanelId::Inbox);
    }

    #[test]
    fn test_same_fkey_twice_picks_item() {
        let mut focus = FocusState::default();
        assert_eq!(focus.dispatch(key(KeyCode::F(2))), Dispatch::Consumed);
        assert_eq!(focus.focus(), Focus::Menu(MenuId::Edit));

        assert_eq!(
            focus.dispatch(key(KeyCode::F(2))),
            Dispatch::Action(MenuAction::Copy)
        );
        assert_eq!(focus.focus(), Focus::Panel(PanelId::Editor));
    }

    #[test]
    fn test_esc_closes_menu_and_restores_panel() {
        let mut focus = FocusState::new(PanelId::FileList);
        focus.dispatch(key(KeyCode::F(1)));
        assert_eq!(focus.dispatch(key(KeyCode::Esc)), Dispatch::Consumed);
        assert_eq!(focus.focus(), Focus::Panel(PanelId::FileList));
    }

    #[test]
    fn test_out_of_range_item_keeps_menu_open() {
        let mut focus = FocusState::default();
        focus.dispatch(key(KeyCode::F(3)));
        assert_eq!(focus.dispatch(key(KeyCode::F(4))), Dispatch::Consumed);
        assert_eq!(focus.dispatch(key(KeyCode::Char('9'))), Dispatch::Consumed);
        assert_eq!(focus.dispatch(key(KeyCode::Char('0'))), Dispatch::Consumed);
        assert_eq!(focus.focus(), Focus::Menu(MenuId::Help));

        assert_eq!(
            focus.dispatch(key(KeyCode::Char('1'))),
            Dispatch::Action(MenuAction::About)
        );
    }

    #[test]
    fn test_menu_swallows_other_keys() {
        let mut focus = FocusState::default();
        focus.dispatch(key(KeyCode::F(1)));
        assert_eq!(focus.dispatch(key(KeyCode::Char('x'))), Dispatch::Consumed);
        assert_eq!(focus.dispatch(key(KeyCode::Tab)), Dispatch::Consumed);
        assert_eq!(focus.dispatch(ctrl('q')), Dispatch::Consumed);
        assert_eq!(focus.focus(), Focus::Menu(MenuId::File));
        assert_eq!(focus.panel(), PanelId::Editor);
    }

    #[test]
    fn test_highlight_and_enter() {
        let mut focus = FocusState::default();
        focus.dispatch(key(KeyCode::F(1)));
        focus.dispatch(key(KeyCode::Up));
        assert_eq!(focus.open_menu_state(), Some((MenuId::File, 3)));
        focus.dispatch(key(KeyCode::Down));
        focus.dispatch(key(KeyCode::Down));
        assert_eq!(focus.open_menu_state(), Some((MenuId::File, 1)));
        assert_eq!(
            focus.dispatch(key(KeyCode::Enter)),
            Dispatch::Action(MenuAction::Open)
        );
    }

    #[test]
    fn test_left_right_switch_menus() {
        let mut focus = FocusState::default();
        focus.dispatch(key(KeyCode::F(1)));
        focus.dispatch(key(KeyCode::Left));
        assert_eq!(focus.focus(), Focus::Menu(MenuId::Help));
        focus.dispatch(key(KeyCode::Right));
        assert_eq!(focus.focus(), Focus::Menu(MenuId::File));
    }

    #[test]
    fn test_global_shortcuts_outside_overlays() {
        let mut focus = FocusState::new(PanelId::Inbox);
        assert_eq!(focus.dispatch(ctrl('q')), Dispatch::Action(MenuAction::Exit));
        assert_eq!(focus.dispatch(ctrl('s')), Dispatch::Action(MenuAction::Save));
        assert_eq!(focus.dispatch(ctrl('n')), Dispatch::Action(MenuAction::New));
        assert_eq!(focus.dispatch(ctrl('c')), Dispatch::Panel(PanelId::Inbox));
        assert_eq!(
            focus.dispatch(key(KeyCode::F(5))),
            Dispatch::Panel(PanelId::Inbox)
        );
        assert_eq!(focus.dispatch(key(KeyCode::Esc)), Dispatch::Panel(PanelId::Inbox));
    }

    #[test]
    fn test_email_modal_scrolls_then_closes_to_inbox() {
        let mut focus = FocusState::default();
        let mut modal = modal();
        modal.resize(20, 5);
        focus.open_email(modal);
        assert_eq!(focus.focus(), Focus::EmailModal);

        assert_eq!(focus.dispatch(key(KeyCode::PageDown)), Dispatch::Consumed);
        match focus.overlay() {
            Some(Overlay::EmailModal(modal)) => assert_eq!(modal.viewport().scroll_offset, 4),
            other => panic!("unexpected overlay: {:?}", other),
        }

        assert_eq!(focus.dispatch(key(KeyCode::Char('q'))), Dispatch::Consumed);
        assert_eq!(focus.focus(), Focus::Panel(PanelId::Inbox));
    }

    #[test]
    fn test_focus_panel_ignored_under_overlay() {
        let mut focus = FocusState::default();
        focus.open_menu(MenuId::File);
        focus.focus_panel(PanelId::FileList);
        assert_eq!(focus.panel(), PanelId::Editor);
        focus.close_overlay();
        focus.focus_panel(PanelId::FileList);
        assert_eq!(focus.panel(), PanelId::FileList);
    }
}
