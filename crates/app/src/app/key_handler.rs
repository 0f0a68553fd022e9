//! Keyboard routing for the application.
//!
//! Real presses and synthetic repeats both go through the focus state
//! machine; only presses that reach the editor start a hold.

use anyhow::Result;
use crossterm::event::KeyEvent;
use std::time::Instant;

use bitworks_core::InputEvent;
use bitworks_keyboard::{is_repeatable, key_name, RepeatEvent};
use bitworks_logger as logger;

use super::App;
use crate::focus::{Dispatch, PanelId};

impl App {
    /// Handle a real key press
    pub(super) fn handle_key_press(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        logger::debug(format!(
            "Key event: {} modifiers={:?}",
            key_name(&key),
            key.modifiers
        ));

        // Any key skips the boot screen
        if let Some(boot) = &mut self.boot {
            boot.skip();
            return Ok(());
        }

        // Status message lives until the next key press
        self.state.clear_status();

        self.route_input(InputEvent::Press(key), now)
    }

    /// Handle an auto-repeat sent by the terminal.
    ///
    /// Dropped when our own timer repeats the key (a repeatable key bound for
    /// the editor); otherwise it acts as a fresh press, so lists, the email
    /// modal and `key_repeat = false` keep the terminal's native repeat.
    pub(super) fn handle_terminal_repeat(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if self.timer_repeats(&key) {
            return Ok(());
        }
        self.handle_key_press(key, now)
    }

    fn timer_repeats(&self, key: &KeyEvent) -> bool {
        self.repeater.is_enabled()
            && !self.focus.has_overlay()
            && self.focus.panel() == PanelId::Editor
            && is_repeatable(key)
    }

    /// Handle a repeat produced by the timer
    pub(super) fn handle_repeat(&mut self, repeat: RepeatEvent, now: Instant) -> Result<()> {
        if self.boot.is_some() {
            return Ok(());
        }
        self.route_input(InputEvent::Repeat(repeat), now)
    }

    fn route_input(&mut self, input: InputEvent, now: Instant) -> Result<()> {
        let key = input.key();
        let panel_before = self.focus.panel();

        match self.focus.dispatch(key) {
            Dispatch::Consumed => {}
            Dispatch::Action(action) => self.execute_menu_action(action)?,
            Dispatch::Panel(id) => {
                if id == PanelId::Editor && !input.is_repeat() {
                    self.repeater.press(key, now);
                }
                let events = self.panels.get_mut(id).handle_key(key);
                self.process_panel_events(events)?;
            }
        }

        // Holds belong to the editor; leaving it ends them
        if self.focus.panel() != panel_before {
            self.repeater.clear();
        }
        self.sync_repeater();
        Ok(())
    }

    /// Suspend the repeat timer while an overlay is open.
    fn sync_repeater(&mut self) {
        let overlay = self.focus.has_overlay();
        if overlay && !self.repeater.is_suspended() {
            self.repeater.suspend();
        } else if !overlay && self.repeater.is_suspended() {
            self.repeater.resume();
        }
    }
}
