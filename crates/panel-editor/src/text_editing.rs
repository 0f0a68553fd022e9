//! Text editing operations for the editor.
//!
//! Each function applies one edit at the cursor and returns the new cursor
//! position. Selection handling and read-only checks are the caller's job.

use bitworks_buffer::{Cursor, LineBuffer};

/// Insert a character at the cursor position.
pub fn insert_char(buffer: &mut LineBuffer, cursor: Cursor, ch: char) -> Cursor {
    let mut text = [0u8; 4];
    buffer.insert_str(cursor, ch.encode_utf8(&mut text))
}

/// Split the line at the cursor.
pub fn insert_newline(buffer: &mut LineBuffer, cursor: Cursor) -> Cursor {
    buffer.split_line(cursor)
}

/// Delete the grapheme before the cursor (backspace).
///
/// At the start of a line the line is merged into the previous one.
/// Returns None at the start of the buffer.
pub fn backspace(buffer: &mut LineBuffer, cursor: Cursor) -> Option<Cursor> {
    let cursor = buffer.clamp(cursor);
    if cursor.column > 0 {
        let target = Cursor::at(cursor.line, cursor.column - 1);
        buffer.remove_grapheme(target)?;
        Some(target)
    } else if cursor.line > 0 {
        let column = buffer.join_with_next(cursor.line - 1)?;
        Some(Cursor::at(cursor.line - 1, column))
    } else {
        None
    }
}

/// Delete the grapheme at the cursor.
///
/// At the end of a line the next line is merged into this one.
/// Returns None at the end of the buffer.
pub fn delete_forward(buffer: &mut LineBuffer, cursor: Cursor) -> Option<Cursor> {
    let cursor = buffer.clamp(cursor);
    if cursor.column < buffer.line_len(cursor.line) {
        buffer.remove_grapheme(cursor)?;
        Some(cursor)
    } else {
        buffer.join_with_next(cursor.line)?;
        Some(cursor)
    }
}
