//! Line-oriented text storage.
//!
//! Lines never contain line breaks and the buffer always holds at least one
//! (possibly empty) line. Columns are grapheme cluster indices.

use unicode_segmentation::UnicodeSegmentation;

use crate::Cursor;

fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset of grapheme `column` in `line`; the line length past its end.
fn byte_offset(line: &str, column: usize) -> usize {
    line.grapheme_indices(true)
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Split text on `\n`, dropping a `\r` that precedes it.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Document text as an ordered list of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create a buffer holding one empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a buffer from stored lines; an empty list becomes one empty line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    /// Create a buffer by splitting text on line breaks
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(split_lines(text).into_iter().map(String::from).collect())
    }

    /// Lines joined by `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the last line
    pub fn max_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Line text, empty for an out-of-range index
    pub fn line(&self, idx: usize) -> &str {
        self.lines.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Line length in graphemes
    pub fn line_len(&self, idx: usize) -> usize {
        grapheme_len(self.line(idx))
    }

    /// True for a single empty line
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Position after the last grapheme of the last line
    pub fn last_position(&self) -> Cursor {
        let line = self.max_line();
        Cursor::at(line, self.line_len(line))
    }

    /// Nearest valid position to `pos`
    pub fn clamp(&self, pos: Cursor) -> Cursor {
        let line = pos.line.min(self.max_line());
        Cursor::at(line, pos.column.min(self.line_len(line)))
    }

    /// Insert text without line breaks at `pos`; returns the position after it.
    pub fn insert_str(&mut self, pos: Cursor, text: &str) -> Cursor {
        let pos = self.clamp(pos);
        let line = &mut self.lines[pos.line];
        let at = byte_offset(line, pos.column);
        line.insert_str(at, text);
        Cursor::at(pos.line, grapheme_len(&line[..at + text.len()]))
    }

    /// Insert possibly multi-line text at `pos`; returns the position after it.
    ///
    /// The first line is appended to the text before `pos`, the last line is
    /// prepended to the text after it and intermediate lines become whole
    /// lines in between.
    pub fn insert_text(&mut self, pos: Cursor, text: &str) -> Cursor {
        let parts = split_lines(text);
        let pos = self.clamp(pos);
        if parts.len() == 1 {
            return self.insert_str(pos, parts[0]);
        }

        let line = &mut self.lines[pos.line];
        let at = byte_offset(line, pos.column);
        let tail = line.split_off(at);
        line.push_str(parts[0]);

        let last = parts[parts.len() - 1];
        let mut inserted: Vec<String> = parts[1..parts.len() - 1]
            .iter()
            .map(|part| part.to_string())
            .collect();
        inserted.push(format!("{}{}", last, tail));

        let end_line = pos.line + inserted.len();
        self.lines.splice(pos.line + 1..pos.line + 1, inserted);
        Cursor::at(end_line, grapheme_len(last))
    }

    /// Split the line at `pos`; returns the start of the new line.
    pub fn split_line(&mut self, pos: Cursor) -> Cursor {
        let pos = self.clamp(pos);
        let line = &mut self.lines[pos.line];
        let at = byte_offset(line, pos.column);
        let tail = line.split_off(at);
        self.lines.insert(pos.line + 1, tail);
        Cursor::at(pos.line + 1, 0)
    }

    /// Remove the grapheme at `pos`, returning it.
    pub fn remove_grapheme(&mut self, pos: Cursor) -> Option<String> {
        let line = self.lines.get_mut(pos.line)?;
        let (at, len) = line
            .grapheme_indices(true)
            .nth(pos.column)
            .map(|(idx, g)| (idx, g.len()))?;
        let removed = line[at..at + len].to_string();
        line.replace_range(at..at + len, "");
        Some(removed)
    }

    /// Append the following line to `line`; returns the join column.
    pub fn join_with_next(&mut self, line: usize) -> Option<usize> {
        if line + 1 >= self.lines.len() {
            return None;
        }
        let next = self.lines.remove(line + 1);
        let column = self.line_len(line);
        self.lines[line].push_str(&next);
        Some(column)
    }

    /// Text between two positions, lines joined with `\n`.
    pub fn text_range(&self, from: Cursor, to: Cursor) -> String {
        let (start, end) = self.ordered(from, to);
        let first = self.line(start.line);
        let start_at = byte_offset(first, start.column);

        if start.line == end.line {
            let end_at = byte_offset(first, end.column);
            return first[start_at..end_at].to_string();
        }

        let mut text = first[start_at..].to_string();
        for line in &self.lines[start.line + 1..end.line] {
            text.push('\n');
            text.push_str(line);
        }
        let last = self.line(end.line);
        text.push('\n');
        text.push_str(&last[..byte_offset(last, end.column)]);
        text
    }

    /// Remove the text between two positions, merging the head of the first
    /// line with the tail of the last. Returns the start position.
    pub fn delete_range(&mut self, from: Cursor, to: Cursor) -> Cursor {
        let (start, end) = self.ordered(from, to);
        let first = self.line(start.line);
        let head = &first[..byte_offset(first, start.column)];
        let last = self.line(end.line);
        let tail = &last[byte_offset(last, end.column)..];
        let merged = format!("{}{}", head, tail);

        self.lines.splice(start.line..=end.line, std::iter::once(merged));
        start
    }

    fn ordered(&self, a: Cursor, b: Cursor) -> (Cursor, Cursor) {
        let (a, b) = (self.clamp(a), self.clamp(b));
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_never_empty() {
        assert_eq!(LineBuffer::from_lines(Vec::new()).line_count(), 1);
        assert!(LineBuffer::from_text("").is_empty());
        assert_eq!(LineBuffer::new().last_position(), Cursor::at(0, 0));
    }

    #[test]
    fn test_text_conversion_drops_carriage_returns() {
        let buf = LineBuffer::from_text("first\r\nsecond\n");
        assert_eq!(buf.lines(), &["first", "second", ""]);
        assert_eq!(buf.to_text(), "first\nsecond\n");
    }

    #[test]
    fn test_split_line_at_end() {
        let mut buf = buffer(&["abc", "def"]);
        let cursor = buf.split_line(Cursor::at(0, 3));
        assert_eq!(buf.lines(), &["abc", "", "def"]);
        assert_eq!(cursor, Cursor::at(1, 0));
    }

    #[test]
    fn test_graphemes_are_single_columns() {
        let mut buf = buffer(&["e\u{301}tude"]);
        assert_eq!(buf.line_len(0), 5);
        assert_eq!(buf.remove_grapheme(Cursor::at(0, 0)).as_deref(), Some("e\u{301}"));
        assert_eq!(buf.line(0), "tude");

        let cursor = buf.insert_str(Cursor::at(0, 4), "s\u{00e9}");
        assert_eq!(buf.line(0), "tudes\u{00e9}");
        assert_eq!(cursor, Cursor::at(0, 6));
    }

    #[test]
    fn test_join_with_next() {
        let mut buf = buffer(&["ab", "cd"]);
        assert_eq!(buf.join_with_next(0), Some(2));
        assert_eq!(buf.lines(), &["abcd"]);
        assert_eq!(buf.join_with_next(0), None);
    }

    #[test]
    fn test_text_range_multi_line() {
        let buf = buffer(&["one", "two", "three"]);
        assert_eq!(
            buf.text_range(Cursor::at(0, 1), Cursor::at(2, 2)),
            "ne\ntwo\nth"
        );
        assert_eq!(buf.text_range(Cursor::at(2, 4), Cursor::at(2, 1)), "hre");
    }

    #[test]
    fn test_delete_range_merges_lines() {
        let mut buf = buffer(&["one", "two", "three"]);
        let cursor = buf.delete_range(Cursor::at(0, 1), Cursor::at(2, 2));
        assert_eq!(buf.lines(), &["oree"]);
        assert_eq!(cursor, Cursor::at(0, 1));
    }

    #[test]
    fn test_insert_text_multi_line() {
        let mut buf = buffer(&["head|tail"]);
        let cursor = buf.insert_text(Cursor::at(0, 5), "A\nB\nC");
        assert_eq!(buf.lines(), &["head|A", "B", "Ctail"]);
        assert_eq!(cursor, Cursor::at(2, 1));
    }

    #[test]
    fn test_delete_then_insert_restores_text() {
        let original = buffer(&["alpha", "beta", "gamma", "delta"]);
        let cases = [
            (Cursor::at(0, 0), Cursor::at(0, 5)),
            (Cursor::at(0, 2), Cursor::at(3, 1)),
            (Cursor::at(1, 4), Cursor::at(2, 0)),
            (Cursor::at(3, 5), Cursor::at(0, 0)),
        ];

        for (a, b) in cases {
            let mut buf = original.clone();
            let text = buf.text_range(a, b);
            let start = buf.delete_range(a, b);
            let end = buf.insert_text(start, &text);
            assert_eq!(buf, original, "range {:?}..{:?}", a, b);
            assert_eq!(end, a.max(b));
        }
    }

    #[test]
    fn test_clamp() {
        let buf = buffer(&["abc", "de"]);
        assert_eq!(buf.clamp(Cursor::at(5, 9)), Cursor::at(1, 2));
        assert_eq!(buf.clamp(Cursor::at(0, 9)), Cursor::at(0, 3));
    }
}
