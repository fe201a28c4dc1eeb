//! Offset to line/column conversion.

use super::Position;

/// Maps absolute character offsets into one canonical document buffer to
/// [`Position`] coordinates and back.
///
/// Built once per document text and valid for the lifetime of one analysis
/// pass; a document edit invalidates the index along with every offset
/// derived from the old text. All offsets and columns are counted in
/// characters, not bytes, matching the offsets the analyzer stores in its
/// [`Span`](super::Span)s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Character offsets of the first character of each line. Always holds
    /// at least the entry for line 0.
    line_starts: Vec<usize>,
    /// Total character count of the indexed text.
    len: usize,
}

impl LineIndex {
    /// Build a line index by scanning `text` once.
    ///
    /// A line ends at `\n`; `\r\n` terminators need no special casing since
    /// the `\r` is just the last column of its line.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for (offset, c) in text.chars().enumerate() {
            if c == '\n' {
                line_starts.push(offset + 1);
            }
            len = offset + 1;
        }
        Self { line_starts, len }
    }

    /// Total character count of the indexed text.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the indexed text was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines in the indexed text.
    ///
    /// An empty document has one (empty) line; a trailing `\n` opens a final
    /// empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Character offset of the first character of `line`, if the line exists.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Map an absolute character offset to its (line, column) coordinate.
    ///
    /// `offset` may equal the text length, yielding the end-of-buffer
    /// position.
    ///
    /// # Panics
    /// Panics if `offset` lies beyond the end of the indexed text. That is a
    /// defect in the caller (an offset from a different or stale buffer);
    /// clamping would corrupt the reported diagnostic location.
    pub fn position(&self, offset: usize) -> Position {
        assert!(
            offset <= self.len,
            "offset {offset} is outside the indexed text (length {})",
            self.len
        );
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    /// Map a (line, column) coordinate back to an absolute character offset.
    ///
    /// Returns `None` when the line does not exist or the column runs past
    /// the end of that line. This lookup is legitimately partial: consumers
    /// probe positions that may not exist when placing cursors.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line_start = self.line_start(position.line())?;
        let line_end = match self.line_start(position.line() + 1) {
            // Interior line: the terminating '\n' is its last column.
            Some(next_start) => next_start - 1,
            // Final line: the end-of-buffer offset is addressable.
            None => self.len,
        };
        let offset = line_start + position.column();
        (offset <= line_end).then_some(offset)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_empty_text() {
        let index = LineIndex::new("");
        assert!(index.is_empty());
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), Position::new(0, 0));
        assert_eq!(index.offset(Position::new(0, 0)), Some(0));
        assert_eq!(index.offset(Position::new(0, 1)), None);
        assert_eq!(index.offset(Position::new(1, 0)), None);
    }

    #[rstest]
    #[case(0, 0, 0)] // 'l' of line1
    #[case(4, 0, 4)] // '1' of line1
    #[case(5, 0, 5)] // '\n' after line1
    #[case(6, 1, 0)] // 'l' of line2
    #[case(12, 2, 0)] // 'l' of line3
    #[case(17, 2, 5)] // end of buffer
    fn test_position(#[case] offset: usize, #[case] line: usize, #[case] column: usize) {
        let index = LineIndex::new("line1\nline2\nline3");
        assert_eq!(index.position(offset), Position::new(line, column));
    }

    #[test]
    fn test_position_roundtrips_through_offset() {
        let index = LineIndex::new("line1\nline2\nline3");
        for offset in 0..=index.len() {
            let position = index.position(offset);
            assert_eq!(index.offset(position), Some(offset));
        }
    }

    #[test]
    #[should_panic(expected = "outside the indexed text")]
    fn test_position_past_end_panics() {
        LineIndex::new("abc").position(4);
    }

    #[test]
    fn test_offset_rejects_missing_coordinates() {
        let index = LineIndex::new("ab\ncdef");
        // Column past the terminating '\n' of line 0.
        assert_eq!(index.offset(Position::new(0, 3)), None);
        // The '\n' itself is addressable.
        assert_eq!(index.offset(Position::new(0, 2)), Some(2));
        // Nonexistent line.
        assert_eq!(index.offset(Position::new(2, 0)), None);
        // End of buffer on the final line.
        assert_eq!(index.offset(Position::new(1, 4)), Some(7));
        assert_eq!(index.offset(Position::new(1, 5)), None);
    }

    #[test]
    fn test_crlf_counts_cr_as_column() {
        let index = LineIndex::new("ab\r\ncd");
        assert_eq!(index.line_count(), 2);
        // The '\r' sits at column 2 of line 0.
        assert_eq!(index.position(2), Position::new(0, 2));
        assert_eq!(index.position(4), Position::new(1, 0));
    }

    #[test]
    fn test_trailing_newline_opens_empty_line() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.position(3), Position::new(1, 0));
        assert_eq!(index.line_start(1), Some(3));
    }

    #[test]
    fn test_char_offsets_not_bytes() {
        // 'é' is two bytes but one character.
        let index = LineIndex::new("é\nab");
        assert_eq!(index.len(), 4);
        assert_eq!(index.position(1), Position::new(0, 1));
        assert_eq!(index.position(2), Position::new(1, 0));
    }

    #[test]
    fn test_line_start_lookup() {
        let index = LineIndex::new("a\nbc\nd");
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(2));
        assert_eq!(index.line_start(2), Some(5));
        assert_eq!(index.line_start(3), None);
    }
}
