//! Text selection operations for the editor.
//!
//! This module provides utilities for managing text selections, including
//! selecting all text, getting selected text, and deleting selections.

use bitworks_buffer::{Cursor, LineBuffer, Selection};

/// Select all text in the buffer.
///
/// Returns (new_selection, new_cursor_position).
pub fn select_all(buffer: &LineBuffer) -> (Selection, Cursor) {
    let end = buffer.last_position();
    (Selection::new(Cursor::new(), end), end)
}

/// Start new selection or continue existing.
///
/// Returns Some(selection) if a new selection should be started, None if selection exists.
pub fn start_or_extend_selection(
    current_selection: Option<&Selection>,
    cursor: Cursor,
) -> Option<Selection> {
    if current_selection.is_none() {
        Some(Selection::start_at(cursor))
    } else {
        None
    }
}

/// Move the extent of the selection after cursor movement.
pub fn update_selection_extent(selection: &mut Option<Selection>, new_cursor: Cursor) {
    if let Some(ref mut sel) = selection {
        sel.extend(new_cursor);
    }
}

/// Get selected text from buffer; None when nothing is selected.
pub fn get_selected_text(buffer: &LineBuffer, selection: Option<&Selection>) -> Option<String> {
    let selection = selection.filter(|s| !s.is_empty())?;
    let (start, end) = selection.bounds();
    Some(buffer.text_range(start, end))
}

/// Delete selected text from buffer.
///
/// Returns the cursor position (start of the selection) when text was removed.
pub fn delete_selection(buffer: &mut LineBuffer, selection: Option<&Selection>) -> Option<Cursor> {
    let selection = selection.filter(|s| !s.is_empty())?;
    let (start, end) = selection.bounds();
    Some(buffer.delete_range(start, end))
}
