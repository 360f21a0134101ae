//! Byte ranges within one unit's text.
//!
//! A `Span` does not know which unit it belongs to; labels pair it with a
//! `UnitId`.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end`.
///
/// Offsets are `u32`: units above 4 GiB are rejected long before they reach
/// the lexer in practice, and `from_range` clamps rather than panics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

crate::static_assert_size!(Span, 8);

impl Span {
    /// Stands in where a node has no source text.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// An empty span at `offset`, used for "expected X here".
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// Span of a lexer match. Offsets past `u32::MAX` saturate.
    pub fn from_range(range: Range<usize>) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(self, offset: u32) -> bool {
        (self.start..self.end).contains(&offset)
    }

    /// The smallest span covering both.
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
