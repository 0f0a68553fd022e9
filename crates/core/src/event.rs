//! Event types for BitWorks.
//!
//! This module provides:
//! - `Event` - Terminal events (key presses, repeats, releases, resize)
//! - `InputEvent` - A key press, real or synthesized by the repeat timer
//! - `EventHandler` - Frame-paced polling for terminal events
//! - `PanelEvent` - Events emitted by panels to communicate with the application

use std::time::{Duration, Instant};

use anyhow::Result;
use bitworks_keyboard::RepeatEvent;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Terminal event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key pressed
    Key(KeyEvent),
    /// Auto-repeat generated by the terminal for a held key
    KeyRepeat(KeyEvent),
    /// Key released (only reported by terminals with release reporting)
    KeyRelease(KeyCode),
    /// Terminal resize event
    Resize(u16, u16),
}

/// Input routed through the focus state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Real key press
    Press(KeyEvent),
    /// Synthetic repeat of a held key
    Repeat(RepeatEvent),
}

impl InputEvent {
    /// Key to act on; a repeat acts like the press that started it
    pub fn key(&self) -> KeyEvent {
        match self {
            InputEvent::Press(key) => *key,
            InputEvent::Repeat(repeat) => repeat.payload,
        }
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, InputEvent::Repeat(_))
    }
}

/// Event handler pacing the main loop at a fixed frame rate
pub struct EventHandler {
    frame_duration: Duration,
}

impl EventHandler {
    /// Create new event handler with specified frame duration
    pub fn new(frame_duration: Duration) -> Self {
        Self { frame_duration }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Wait for the rest of the current frame, collecting every event that
    /// arrives before its deadline.
    pub fn next_frame(&self) -> Result<Vec<Event>> {
        let deadline = Instant::now() + self.frame_duration;
        let mut events = Vec::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Some(event) = translate(event::read()?) {
                events.push(event);
            }
        }

        Ok(events)
    }
}

/// Map a crossterm event to an application event.
///
/// Bare modifier keys (reported once every key is sent as an escape code)
/// are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if matches!(key.code, KeyCode::Modifier(_)) => None,
        CrosstermEvent::Key(key) => match key.kind {
            KeyEventKind::Press => Some(Event::Key(key)),
            KeyEventKind::Repeat => Some(Event::KeyRepeat(key)),
            KeyEventKind::Release => Some(Event::KeyRelease(key.code)),
        },
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Events emitted by panels to communicate with the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Set status bar message
    SetStatusMessage { message: String, is_error: bool },

    /// Load a workspace file into the editor
    OpenFile(String),

    /// Show the email at this inbox index in the modal viewer
    OpenEmail(usize),
}

impl PanelEvent {
    pub fn info(message: impl Into<String>) -> Self {
        PanelEvent::SetStatusMessage {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        PanelEvent::SetStatusMessage {
            message: message.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers, ModifierKeyCode};

    fn key_with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_translate_key_kinds() {
        let press = key_with_kind(KeyCode::Left, KeyEventKind::Press);
        assert_eq!(
            translate(CrosstermEvent::Key(press)),
            Some(Event::Key(press))
        );

        let release = key_with_kind(KeyCode::Left, KeyEventKind::Release);
        assert_eq!(
            translate(CrosstermEvent::Key(release)),
            Some(Event::KeyRelease(KeyCode::Left))
        );

        let repeat = key_with_kind(KeyCode::Left, KeyEventKind::Repeat);
        assert_eq!(
            translate(CrosstermEvent::Key(repeat)),
            Some(Event::KeyRepeat(repeat))
        );
        assert_eq!(translate(CrosstermEvent::FocusLost), None);
    }

    #[test]
    fn test_translate_drops_bare_modifiers() {
        let shift = KeyCode::Modifier(ModifierKeyCode::LeftShift);
        for kind in [KeyEventKind::Press, KeyEventKind::Release] {
            let key = key_with_kind(shift, kind);
            assert_eq!(translate(CrosstermEvent::Key(key)), None);
        }
    }

    #[test]
    fn test_repeat_acts_like_its_press() {
        let press = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        let repeat = InputEvent::Repeat(RepeatEvent {
            source_key: press.code,
            payload: press,
        });
        assert_eq!(repeat.key(), press);
        assert!(repeat.is_repeat());
        assert!(!InputEvent::Press(press).is_repeat());
    }
}
