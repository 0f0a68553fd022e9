use std::ops::Range;

/// Explicit scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Vertical window over a list of rows.
///
/// Used by the editor, the email modal and the list panels. The height is
/// injected from the render area every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row (0-based)
    pub scroll_offset: usize,
    /// Number of rows that fit on screen (at least 1)
    pub max_visible_lines: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Viewport {
    pub fn new(max_visible_lines: usize) -> Self {
        Self {
            scroll_offset: 0,
            max_visible_lines: max_visible_lines.max(1),
        }
    }

    /// Update the visible height
    pub fn set_max_visible(&mut self, lines: usize) {
        self.max_visible_lines = lines.max(1);
    }

    /// Largest valid offset for `total` rows
    pub fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.max_visible_lines)
    }

    /// Rows moved by a page key, keeping one row of overlap
    pub fn page_step(&self) -> usize {
        self.max_visible_lines.saturating_sub(1).max(1)
    }

    /// Scroll so that `row` is visible.
    /// Returns true if the offset changed
    pub fn ensure_cursor_visible(&mut self, row: usize, total: usize) -> bool {
        let before = self.scroll_offset;

        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + self.max_visible_lines {
            self.scroll_offset = row + 1 - self.max_visible_lines;
        }

        // Limit offset to avoid empty space at bottom
        self.scroll_offset = self.scroll_offset.min(self.max_offset(total));

        self.scroll_offset != before
    }

    /// Scroll independently of any cursor, clamped to the content.
    /// Returns true if the offset changed
    pub fn scroll(&mut self, direction: ScrollDirection, amount: usize, total: usize) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = match direction {
            ScrollDirection::Up => self.scroll_offset.saturating_sub(amount),
            ScrollDirection::Down => self.scroll_offset.saturating_add(amount),
        }
        .min(self.max_offset(total));
        self.scroll_offset != before
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, total: usize) {
        self.scroll_offset = self.max_offset(total);
    }

    /// Row indices currently on screen
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.scroll_offset.min(total);
        start..(start + self.max_visible_lines).min(total)
    }

    /// Screen row of `row`, or `None` when scrolled out of view
    pub fn cursor_to_screen(&self, row: usize) -> Option<usize> {
        if row >= self.scroll_offset && row < self.scroll_offset + self.max_visible_lines {
            Some(row - self.scroll_offset)
        } else {
            None
        }
    }
}
