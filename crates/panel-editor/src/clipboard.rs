//! Clipboard operations for the editor.
//!
//! Builds the status messages for copy and cut, and splices clipboard
//! content into the buffer for paste.

use bitworks_buffer::{Cursor, LineBuffer};
use bitworks_clipboard::Clipboard;

const PREVIEW_CHARS: usize = 50;

/// Short quoted preview of transferred text.
fn preview(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > PREVIEW_CHARS {
        let preview_text: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{:?}...", preview_text)
    } else {
        format!("{:?}", text)
    }
}

/// Store copied text and return the status message.
pub fn copy_to_clipboard(clipboard: &mut Clipboard, text: String) -> String {
    let message = format!(
        "Copied to clipboard: {} ({} chars)",
        preview(&text),
        text.chars().count()
    );
    clipboard.set(text);
    message
}

/// Store cut text and return the status message.
///
/// Deleting the selection is left to the caller.
pub fn cut_to_clipboard(clipboard: &mut Clipboard, text: String) -> String {
    let message = format!(
        "Cut to clipboard: {} ({} chars)",
        preview(&text),
        text.chars().count()
    );
    clipboard.set(text);
    message
}

/// Insert the clipboard contents at the cursor.
///
/// Returns the new cursor position, or None when the clipboard is empty.
pub fn paste_from_clipboard(
    buffer: &mut LineBuffer,
    cursor: Cursor,
    clipboard: &Clipboard,
) -> Option<Cursor> {
    if clipboard.is_empty() {
        return None;
    }
    Some(buffer.insert_text(cursor, clipboard.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_message() {
        let mut clipboard = Clipboard::new();
        let message = copy_to_clipboard(&mut clipboard, "hello".to_string());
        assert_eq!(message, "Copied to clipboard: \"hello\" (5 chars)");
        assert_eq!(clipboard.get(), "hello");
    }

    #[test]
    fn test_long_preview_is_truncated() {
        let mut clipboard = Clipboard::new();
        let text = "x".repeat(80);
        let message = cut_to_clipboard(&mut clipboard, text.clone());
        assert!(message.ends_with("\"... (80 chars)"));
        assert_eq!(clipboard.get(), text);
    }

    #[test]
    fn test_paste_empty_clipboard() {
        let mut buffer = LineBuffer::from_text("abc");
        let clipboard = Clipboard::new();
        assert_eq!(paste_from_clipboard(&mut buffer, Cursor::at(0, 1), &clipboard), None);
        assert_eq!(buffer.to_text(), "abc");
    }
}
