use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use bitworks_buffer::{
    Cursor, EditError, EditResult, LineBuffer, NoOpReason, ScrollDirection, Selection, Viewport,
};
use bitworks_clipboard::Clipboard;
use bitworks_core::{Panel, PanelEvent, RenderContext};

use crate::{
    clipboard, file_io::ReadOnlyPolicy, file_io::Storage, keyboard::EditorCommand, rendering,
    selection,
    state::{Document, InputState},
    text_editing,
};

/// Cursor motions available from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    DocumentStart,
    DocumentEnd,
}

/// Convert the outcome of an editing operation into a status bar event.
///
/// Silent no-ops (e.g. at a buffer boundary) produce nothing.
pub fn status_event(result: EditResult) -> Option<PanelEvent> {
    match result {
        Ok(()) => None,
        Err(EditError::NoOp(reason)) => reason.message().map(PanelEvent::info),
        Err(e) => Some(PanelEvent::error(format!("Error: {}", e))),
    }
}

/// Editor session: one document plus everything needed to edit it.
///
/// The clipboard lives here too and survives loading other documents.
#[derive(Debug)]
pub struct Editor {
    // === Core editing state ===
    buffer: LineBuffer,
    cursor: Cursor,
    /// Text selection (if any)
    selection: Option<Selection>,
    /// Vertical scrolling window
    viewport: Viewport,
    clipboard: Clipboard,

    // === Grouped state ===
    document: Document,
    input: InputState,

    /// Status message to display to user
    status_message: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Clipboard::new())
    }
}

impl Editor {
    /// Create new editor with an empty untitled document
    pub fn new(clipboard: Clipboard) -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: Cursor::new(),
            selection: None,
            viewport: Viewport::default(),
            clipboard,
            document: Document::untitled(),
            input: InputState::default(),
            status_message: None,
        }
    }

    /// Create editor holding `text` in an untitled document
    pub fn from_text(text: &str) -> Self {
        let mut editor = Self::default();
        editor.buffer = LineBuffer::from_text(text);
        editor
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Place the cursor, clamped to the buffer. The selection is cleared.
    pub fn set_cursor(&mut self, pos: Cursor) {
        self.cursor = self.buffer.clamp(pos);
        self.selection = None;
        self.input.clear_preferred_column();
        self.ensure_cursor_visible();
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Take the pending status message, if any
    pub fn take_status_message(&mut self) -> Option<String> {
        self.status_message.take()
    }

    // === Documents ===

    /// Replace the document with an empty untitled one.
    pub fn new_document(&mut self) {
        self.replace_document(LineBuffer::new(), Document::untitled());
    }

    /// Replace the document with the given lines.
    pub fn open_document(&mut self, name: &str, lines: Vec<String>, read_only: bool) {
        self.replace_document(LineBuffer::from_lines(lines), Document::named(name, read_only));
    }

    /// Load a document from storage.
    ///
    /// On `NotFound` nothing changes; the caller decides whether to start a
    /// fresh document under that name.
    pub fn load_document(
        &mut self,
        name: &str,
        storage: &dyn Storage,
        policy: &dyn ReadOnlyPolicy,
    ) -> EditResult {
        let lines = storage.load(name)?;
        let read_only = policy.is_read_only(name) || storage.is_protected(name);
        if read_only {
            bitworks_logger::info(format!("Opened {} read-only", name));
        }
        self.open_document(name, lines, read_only);
        Ok(())
    }

    /// Save the document to storage.
    ///
    /// On failure the buffer and the modified flag are left untouched.
    pub fn save_document(&mut self, storage: &dyn Storage) -> EditResult {
        self.check_writable()?;
        let name = self.document.save_name().to_string();
        storage.save(&name, self.buffer.lines())?;

        self.document.name = Some(name.clone());
        self.document.modified = false;
        self.status_message = Some(format!("Saved {}", name));
        Ok(())
    }

    fn replace_document(&mut self, buffer: LineBuffer, document: Document) {
        self.buffer = buffer;
        self.document = document;
        self.cursor = Cursor::new();
        self.selection = None;
        self.viewport.scroll_to_top();
        self.input.clear_preferred_column();
    }

    fn check_writable(&self) -> EditResult {
        if self.document.read_only {
            Err(EditError::ReadOnly)
        } else {
            Ok(())
        }
    }

    // === Navigation ===

    /// Move the cursor, clearing any selection.
    pub fn navigate(&mut self, motion: Motion) -> EditResult {
        self.selection = None;
        let moved = self.apply_motion(motion);
        self.ensure_cursor_visible();
        if moved {
            Ok(())
        } else {
            Err(NoOpReason::Boundary.into())
        }
    }

    /// Move the cursor, starting or extending the selection.
    pub fn navigate_with_selection(&mut self, motion: Motion) -> EditResult {
        if let Some(new_selection) =
            selection::start_or_extend_selection(self.selection.as_ref(), self.cursor)
        {
            self.selection = Some(new_selection);
        }
        let moved = self.apply_motion(motion);
        selection::update_selection_extent(&mut self.selection, self.cursor);
        self.ensure_cursor_visible();
        if moved {
            Ok(())
        } else {
            Err(NoOpReason::Boundary.into())
        }
    }

    /// Apply a motion to the cursor; returns whether it moved.
    fn apply_motion(&mut self, motion: Motion) -> bool {
        let before = self.cursor;
        let max_line = self.buffer.max_line();

        match motion {
            Motion::Left => {
                let prev_len = self.buffer.line_len(self.cursor.line.saturating_sub(1));
                self.cursor.move_left(prev_len);
                self.input.clear_preferred_column();
            }
            Motion::Right => {
                let line_len = self.buffer.line_len(self.cursor.line);
                self.cursor.move_right(line_len, max_line);
                self.input.clear_preferred_column();
            }
            Motion::Up => self.move_vertically(|cursor| cursor.move_up(1)),
            Motion::Down => self.move_vertically(|cursor| cursor.move_down(1, max_line)),
            Motion::PageUp => {
                let step = self.viewport.page_step();
                self.move_vertically(|cursor| cursor.move_up(step));
                self.viewport
                    .scroll(ScrollDirection::Up, step, self.buffer.line_count());
            }
            Motion::PageDown => {
                let step = self.viewport.page_step();
                self.move_vertically(|cursor| cursor.move_down(step, max_line));
                self.viewport
                    .scroll(ScrollDirection::Down, step, self.buffer.line_count());
            }
            Motion::LineStart => {
                self.cursor.column = 0;
                self.input.clear_preferred_column();
            }
            Motion::LineEnd => {
                self.cursor.column = self.buffer.line_len(self.cursor.line);
                self.input.clear_preferred_column();
            }
            Motion::DocumentStart => {
                self.cursor = Cursor::new();
                self.input.clear_preferred_column();
            }
            Motion::DocumentEnd => {
                self.cursor = self.buffer.last_position();
                self.input.clear_preferred_column();
            }
        }

        self.cursor = self.buffer.clamp(self.cursor);
        self.cursor != before
    }

    /// Change line keeping the preferred column, clamped to the new line.
    fn move_vertically(&mut self, move_fn: impl FnOnce(&mut Cursor)) {
        let column = self.input.take_preferred_column(self.cursor.column);
        move_fn(&mut self.cursor);
        self.cursor.column = column.min(self.buffer.line_len(self.cursor.line));
    }

    // === Selection ===

    /// Select the whole document.
    pub fn select_all(&mut self) {
        let (new_selection, new_cursor) = selection::select_all(&self.buffer);
        self.selection = Some(new_selection);
        self.cursor = new_cursor;
        self.input.clear_preferred_column();
        self.ensure_cursor_visible();
    }

    /// Select from `anchor` to `extent`, leaving the cursor at `extent`.
    pub fn select_range(&mut self, anchor: Cursor, extent: Cursor) {
        let anchor = self.buffer.clamp(anchor);
        let extent = self.buffer.clamp(extent);
        self.selection = Some(Selection::new(anchor, extent));
        self.cursor = extent;
        self.input.clear_preferred_column();
        self.ensure_cursor_visible();
    }

    /// Normalized selection bounds for highlighting
    pub fn selection_bounds(&self) -> Option<(Cursor, Cursor)> {
        self.selection.as_ref().map(Selection::bounds)
    }

    /// Text covered by a non-empty selection
    pub fn selected_text(&self) -> Option<String> {
        selection::get_selected_text(&self.buffer, self.selection.as_ref())
    }

    /// Delete the selected text, leaving the cursor at its start.
    pub fn delete_selection(&mut self) -> EditResult {
        self.check_writable()?;
        if self.remove_selection() {
            Ok(())
        } else {
            Err(NoOpReason::NothingSelected.into())
        }
    }

    /// Remove a non-empty selection from the buffer; any selection is cleared.
    /// Returns whether text was removed.
    fn remove_selection(&mut self) -> bool {
        let removed = selection::delete_selection(&mut self.buffer, self.selection.as_ref());
        self.selection = None;
        match removed {
            Some(new_cursor) => {
                self.commit(new_cursor);
                true
            }
            None => false,
        }
    }

    // === Editing ===

    /// Record a buffer change and move the cursor.
    fn commit(&mut self, new_cursor: Cursor) {
        self.cursor = self.buffer.clamp(new_cursor);
        self.document.modified = true;
        self.input.clear_preferred_column();
        self.ensure_cursor_visible();
    }

    /// Type a printable character, replacing the selection.
    pub fn insert_char(&mut self, ch: char) -> EditResult {
        self.check_writable()?;
        if ch.is_control() {
            return Err(NoOpReason::NotPrintable.into());
        }
        self.remove_selection();
        let new_cursor = text_editing::insert_char(&mut self.buffer, self.cursor, ch);
        self.commit(new_cursor);
        Ok(())
    }

    /// Split the line at the cursor, replacing the selection.
    pub fn insert_newline(&mut self) -> EditResult {
        self.check_writable()?;
        self.remove_selection();
        let new_cursor = text_editing::insert_newline(&mut self.buffer, self.cursor);
        self.commit(new_cursor);
        Ok(())
    }

    /// Delete the selection, or the grapheme before the cursor.
    pub fn backspace(&mut self) -> EditResult {
        self.handle_delete_key(text_editing::backspace)
    }

    /// Delete the selection, or the grapheme at the cursor.
    pub fn delete_forward(&mut self) -> EditResult {
        self.handle_delete_key(text_editing::delete_forward)
    }

    /// Handle backspace/delete key with selection awareness.
    ///
    /// A non-empty selection is deleted instead of a single grapheme; an
    /// empty one is dropped and the key acts normally.
    fn handle_delete_key<F>(&mut self, delete_fn: F) -> EditResult
    where
        F: FnOnce(&mut LineBuffer, Cursor) -> Option<Cursor>,
    {
        self.check_writable()?;
        if self.remove_selection() {
            return Ok(());
        }
        match delete_fn(&mut self.buffer, self.cursor) {
            Some(new_cursor) => {
                self.commit(new_cursor);
                Ok(())
            }
            None => Err(NoOpReason::Boundary.into()),
        }
    }

    // === Clipboard ===

    /// Copy the selection to the clipboard. Allowed on read-only documents.
    pub fn copy(&mut self) -> EditResult {
        let text = self.selected_text().ok_or(NoOpReason::NothingSelected)?;
        self.status_message = Some(clipboard::copy_to_clipboard(&mut self.clipboard, text));
        Ok(())
    }

    /// Copy the selection to the clipboard and delete it.
    pub fn cut(&mut self) -> EditResult {
        self.check_writable()?;
        let text = self.selected_text().ok_or(NoOpReason::NothingSelected)?;
        self.status_message = Some(clipboard::cut_to_clipboard(&mut self.clipboard, text));
        self.remove_selection();
        Ok(())
    }

    /// Insert the clipboard at the cursor, replacing the selection.
    pub fn paste(&mut self) -> EditResult {
        self.check_writable()?;
        if self.clipboard.is_empty() {
            return Err(NoOpReason::EmptyClipboard.into());
        }
        self.remove_selection();
        if let Some(new_cursor) =
            clipboard::paste_from_clipboard(&mut self.buffer, self.cursor, &self.clipboard)
        {
            self.commit(new_cursor);
        }
        Ok(())
    }

    // === Viewport ===

    /// Adopt the number of rows the render area can show.
    pub fn set_max_visible_lines(&mut self, lines: usize) {
        self.viewport.set_max_visible(lines);
    }

    /// Scroll so that the cursor row is on screen.
    pub fn ensure_cursor_visible(&mut self) {
        self.viewport
            .ensure_cursor_visible(self.cursor.line, self.buffer.line_count());
    }

    /// Lines currently inside the viewport
    pub fn visible_lines(&self) -> &[String] {
        &self.buffer.lines()[self.viewport.visible_range(self.buffer.line_count())]
    }

    /// Cursor position as (viewport row, display column), or None when the
    /// cursor row is scrolled out of view.
    pub fn cursor_screen_position(&self) -> Option<(usize, usize)> {
        let row = self.viewport.cursor_to_screen(self.cursor.line)?;
        let column = rendering::display_column(self.buffer.line(self.cursor.line), self.cursor.column);
        Some((row, column))
    }
}

impl Panel for Editor {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn title(&self) -> String {
        let mut title = self.document.title().to_string();
        if self.document.modified {
            title.push_str(" *");
        }
        if self.document.read_only {
            title.push_str(" [RO]");
        }
        title
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        self.set_max_visible_lines(area.height as usize);
        self.ensure_cursor_visible();

        let cursor = self.cursor_screen_position();
        let left_column = cursor
            .map(|(_, x)| rendering::horizontal_offset(x, area.width as usize))
            .unwrap_or(0);

        rendering::render_content(
            buf,
            area,
            &self.buffer,
            &self.viewport,
            self.selection_bounds(),
            left_column,
            ctx.theme,
        );

        if ctx.is_focused {
            if let Some((row, x)) = cursor {
                rendering::render_cursor_at(
                    buf,
                    area.x + (x - left_column) as u16,
                    area.y + row as u16,
                    area,
                    ctx.theme,
                );
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent> {
        let command = EditorCommand::from_key_event(key);

        let mut events = Vec::new();
        if let Some(event) = status_event(command.execute(self)) {
            events.push(event);
        }
        if let Some(message) = self.status_message.take() {
            events.push(PanelEvent::info(message));
        }
        events
    }
}
