//! Line/column coordinates for user-facing diagnostic locations.

use std::fmt;

/// A (line, column) coordinate in the document, both components 0-based.
///
/// Positions are produced by a [`LineIndex`](super::LineIndex) lookup mapping
/// an absolute character offset to coordinates; they carry no identity beyond
/// value equality. Non-negativity is enforced by the unsigned representation.
///
/// Coordinates stay 0-based everywhere inside the analyzer; the 1-based form
/// exists only at display time via [`to_friendly_string`](Self::to_friendly_string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// Create a position at the given 0-based line and column.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The 0-based line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The 0-based column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Render as the 1-based `[line:column]` form shown to users.
    pub fn to_friendly_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pos = Position::new(4, 17);
        assert_eq!(pos.line(), 4);
        assert_eq!(pos.column(), 17);
    }

    #[test]
    fn test_friendly_string_is_one_based() {
        assert_eq!(Position::new(0, 0).to_friendly_string(), "[1:1]");
        assert_eq!(Position::new(9, 41).to_friendly_string(), "[10:42]");
    }

    #[test]
    fn test_display_matches_friendly_string() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.to_string(), pos.to_friendly_string());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
    }

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Position::new(0, 99) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
