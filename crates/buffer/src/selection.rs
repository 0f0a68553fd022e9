use std::cmp::{max, min};

use crate::Cursor;

/// Text selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start point of selection (anchor) - doesn't move
    pub anchor: Cursor,
    /// Active point (moves with cursor)
    pub extent: Cursor,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: Cursor, extent: Cursor) -> Self {
        Self { anchor, extent }
    }

    /// Start a collapsed selection at `pos`
    pub fn start_at(pos: Cursor) -> Self {
        Self::new(pos, pos)
    }

    /// Move the active end
    pub fn extend(&mut self, pos: Cursor) {
        self.extent = pos;
    }

    /// Start of selection (minimum position)
    pub fn start(&self) -> Cursor {
        min(self.anchor, self.extent)
    }

    /// End of selection (maximum position)
    pub fn end(&self) -> Cursor {
        max(self.anchor, self.extent)
    }

    /// Normalized `(start, end)` in row-major order
    pub fn bounds(&self) -> (Cursor, Cursor) {
        (self.start(), self.end())
    }

    /// Selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.extent
    }

    /// Check if selection covers given position (end exclusive)
    pub fn contains(&self, pos: Cursor) -> bool {
        pos >= self.start() && pos < self.end()
    }
}
