//! Keyboard command handling for the editor.
//!
//! Key parsing is kept apart from command execution so bindings can be
//! read in one place and tested on their own.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use bitworks_buffer::EditResult;

use crate::{Editor, Motion};

/// Editor command representing a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Move the cursor, clearing any selection
    Move(Motion),
    /// Move the cursor, starting or extending the selection (Shift)
    Select(Motion),

    // Text editing
    InsertChar(char),
    InsertNewline,
    Backspace,
    Delete,

    // Selection
    SelectAll,

    // Clipboard
    Copy,
    Cut,
    Paste,

    // No operation (for unhandled keys)
    None,
}

impl EditorCommand {
    /// Parse a KeyEvent into an EditorCommand.
    ///
    /// Mutating commands are produced even for read-only documents; the
    /// editor rejects them so the user is told why nothing happened.
    pub fn from_key_event(key: KeyEvent) -> Self {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        if let Some(motion) = Self::motion(key.code, ctrl) {
            if alt {
                return Self::None;
            }
            return if shift {
                Self::Select(motion)
            } else {
                Self::Move(motion)
            };
        }

        match (key.code, key.modifiers) {
            // Clipboard and selection
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Self::SelectAll,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Self::Copy,
            (KeyCode::Insert, KeyModifiers::CONTROL) => Self::Copy,
            (KeyCode::Char('x'), KeyModifiers::CONTROL) => Self::Cut,
            (KeyCode::Delete, KeyModifiers::SHIFT) => Self::Cut,
            (KeyCode::Char('v'), KeyModifiers::CONTROL) => Self::Paste,
            (KeyCode::Insert, KeyModifiers::SHIFT) => Self::Paste,

            // Editing
            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => Self::InsertChar(ch),
            (KeyCode::Enter, KeyModifiers::NONE) => Self::InsertNewline,
            (KeyCode::Backspace, KeyModifiers::NONE | KeyModifiers::SHIFT) => Self::Backspace,
            (KeyCode::Delete, KeyModifiers::NONE) => Self::Delete,

            _ => Self::None,
        }
    }

    /// Cursor motion bound to a key, if any.
    fn motion(code: KeyCode, ctrl: bool) -> Option<Motion> {
        let motion = match (code, ctrl) {
            (KeyCode::Up, false) => Motion::Up,
            (KeyCode::Down, false) => Motion::Down,
            (KeyCode::Left, false) => Motion::Left,
            (KeyCode::Right, false) => Motion::Right,
            (KeyCode::Home, false) => Motion::LineStart,
            (KeyCode::End, false) => Motion::LineEnd,
            (KeyCode::PageUp, false) => Motion::PageUp,
            (KeyCode::PageDown, false) => Motion::PageDown,
            (KeyCode::Home, true) => Motion::DocumentStart,
            (KeyCode::End, true) => Motion::DocumentEnd,
            _ => return None,
        };
        Some(motion)
    }

    /// Execute this command on the given editor.
    pub fn execute(self, editor: &mut Editor) -> EditResult {
        match self {
            Self::Move(motion) => editor.navigate(motion),
            Self::Select(motion) => editor.navigate_with_selection(motion),
            Self::InsertChar(ch) => editor.insert_char(ch),
            Self::InsertNewline => editor.insert_newline(),
            Self::Backspace => editor.backspace(),
            Self::Delete => editor.delete_forward(),
            Self::SelectAll => {
                editor.select_all();
                Ok(())
            }
            Self::Copy => editor.copy(),
            Self::Cut => editor.cut(),
            Self::Paste => editor.paste(),
            Self::None => Ok(()),
        }
    }
}
