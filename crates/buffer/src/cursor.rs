use std::cmp::{min, Ordering};

/// Cursor position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Line number (0-based)
    pub line: usize,
    /// Position in line in graphemes (0-based)
    pub column: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Create cursor at specified position
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Move cursor up
    pub fn move_up(&mut self, lines: usize) {
        self.line = self.line.saturating_sub(lines);
    }

    /// Move cursor down
    pub fn move_down(&mut self, lines: usize, max_line: usize) {
        self.line = min(self.line.saturating_add(lines), max_line);
    }

    /// Move cursor one grapheme left, wrapping to the end of the previous line.
    ///
    /// `prev_line_len` is only consulted when the move wraps.
    pub fn move_left(&mut self, prev_line_len: usize) -> bool {
        if self.column > 0 {
            self.column -= 1;
            true
        } else if self.line > 0 {
            self.line -= 1;
            self.column = prev_line_len;
            true
        } else {
            false
        }
    }

    /// Move cursor one grapheme right, wrapping to the start of the next line.
    pub fn move_right(&mut self, line_len: usize, max_line: usize) -> bool {
        if self.column < line_len {
            self.column += 1;
            true
        } else if self.line < max_line {
            self.line += 1;
            self.column = 0;
            true
        } else {
            false
        }
    }

    /// Clamp column to maximum line length
    pub fn clamp_column(&mut self, max_column: usize) {
        self.column = min(self.column, max_column);
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.line.cmp(&other.line) {
            Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}
