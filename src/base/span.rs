//! Character ranges into the document buffer.
//!
//! A [`Span`] is the unit of location every diagnostic and analyzer result
//! is anchored to. Offsets are absolute character offsets into one canonical
//! document text buffer, stable for the lifetime of one analysis pass.

use std::fmt;

/// A half-open character range `[start_index, after_end_index)` over the
/// document's linear offset space.
///
/// Spans are immutable values. Keeping `length` as the stored field (rather
/// than an end offset) lets zero-length spans exist as a distinct state and
/// keeps all derived-offset arithmetic in one place, so every consumer gets
/// identical edge-case behavior for empty ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start_index: usize,
    length: usize,
}

impl Span {
    /// Create a span covering `length` characters starting at `start_index`.
    #[inline]
    pub const fn new(start_index: usize, length: usize) -> Self {
        Self {
            start_index,
            length,
        }
    }

    /// The first offset covered by this span.
    #[inline]
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// The number of characters this span covers.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The last offset covered by this span.
    ///
    /// Equals `start_index` when the span is empty.
    #[inline]
    pub const fn end_index(&self) -> usize {
        self.start_index + self.length.saturating_sub(1)
    }

    /// The first offset after this span (exclusive upper bound).
    #[inline]
    pub const fn after_end_index(&self) -> usize {
        self.start_index + self.length
    }

    /// Check if the span covers zero characters.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if `index` falls within this span.
    ///
    /// The offset immediately after the span is excluded; callers that need
    /// "cursor may sit right after the token" semantics use
    /// [`contains_or_after`](Self::contains_or_after).
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index()
    }

    /// Check if `index` falls within this span or immediately after it.
    ///
    /// Used for insert points: an edit at `after_end_index` still belongs to
    /// the token this span covers.
    #[inline]
    pub const fn contains_or_after(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.after_end_index()
    }

    /// Check if two spans overlap in at least one character.
    ///
    /// Half-open semantics: adjacent spans do not intersect, and an empty
    /// span intersects nothing.
    #[inline]
    pub const fn intersects(&self, other: Span) -> bool {
        let start = if self.start_index > other.start_index {
            self.start_index
        } else {
            other.start_index
        };
        let end = if self.after_end_index() < other.after_end_index() {
            self.after_end_index()
        } else {
            other.after_end_index()
        };
        start < end
    }

    /// The minimal span covering both `self` and `other`.
    ///
    /// Returns `self` when `other` is absent. The union bridges gaps: the
    /// inputs need not overlap or touch, and any characters between them are
    /// covered by the result.
    pub fn union(&self, other: Option<Span>) -> Span {
        match other {
            None => *self,
            Some(other) => {
                let start = self.start_index.min(other.start_index);
                let after_end = self.after_end_index().max(other.after_end_index());
                Span::new(start, after_end - start)
            }
        }
    }

    /// Union of two optional spans.
    ///
    /// Absent inputs are a valid "no span yet" state: both absent yields
    /// absent, one present yields that one.
    pub fn union_opt(lhs: Option<Span>, rhs: Option<Span>) -> Option<Span> {
        match (lhs, rhs) {
            (None, None) => None,
            (Some(s), None) | (None, Some(s)) => Some(s),
            (Some(lhs), Some(rhs)) => Some(lhs.union(Some(rhs))),
        }
    }

    /// Shift this span by `delta` characters, preserving its length.
    ///
    /// A zero delta returns the span unchanged. Negative deltas are legal;
    /// the caller is responsible for not shifting a span past offset zero.
    ///
    /// # Panics
    /// Panics if the translated start would be negative. That is a defect in
    /// the calling analyzer; clamping instead would silently corrupt every
    /// diagnostic location derived from the span.
    pub fn translate(&self, delta: isize) -> Span {
        if delta == 0 {
            return *self;
        }
        let start_index = self
            .start_index
            .checked_add_signed(delta)
            .unwrap_or_else(|| {
                panic!("span {self} translated past offset 0 (delta {delta})");
            });
        Span::new(start_index, self.length)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_index, self.after_end_index())
    }
}
