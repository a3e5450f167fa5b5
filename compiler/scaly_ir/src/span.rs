//! Source positions and spans.
//!
//! A [`Position`] is a point in the source: byte offset plus the 1-based
//! line and column it falls on. Every syntax node carries a [`Span`] made of
//! the position where it starts and the position where it ends.

use std::fmt;
use std::ops::Range;

/// A point in the source text.
///
/// Ordering and equality only look at the byte offset; line and column are
/// derived from it and carried along for diagnostics.
#[derive(Copy, Clone, Debug, Default, Eq)]
pub struct Position {
    /// Byte offset from the start of the file.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

crate::static_assert_size!(Position, 12);

impl Position {
    /// The first character of a file.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl std::hash::Hash for Position {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The `(start, end)` pair delimiting the text a node was parsed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// A zero-width span at `position`.
    #[inline]
    pub const fn point(position: Position) -> Self {
        Span {
            start: position,
            end: position,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset >= self.end.offset
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Whether `other` lies entirely within this span.
    #[inline]
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Byte range, for slicing source text and for diagnostic renderers.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.offset, self.end.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Maps byte offsets to line/column positions.
///
/// Built once per source file; lookups binary-search the line starts.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<u32>,
}

impl<'src> LineIndex<'src> {
    /// Index the line starts of `source`.
    ///
    /// # Panics
    /// Panics if the source exceeds `u32::MAX` bytes.
    pub fn new(source: &'src str) -> Self {
        if u32::try_from(source.len()).is_err() {
            panic!("source file exceeds {} bytes", u32::MAX);
        }
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .filter_map(|(i, _)| u32::try_from(i + 1).ok()),
        );
        LineIndex {
            source,
            line_starts,
        }
    }

    /// Resolve a byte offset. Offsets past the end clamp to the end of file.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self
            .line_starts
            .partition_point(|&start| start as usize <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line] as usize;
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count());
        Position {
            offset: u32::try_from(offset).unwrap_or(u32::MAX),
            line: u32::try_from(line + 1).unwrap_or(u32::MAX),
            column: u32::try_from(column + 1).unwrap_or(u32::MAX),
        }
    }

    /// Position of the end of the file.
    pub fn end(&self) -> Position {
        self.position(self.source.len())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
