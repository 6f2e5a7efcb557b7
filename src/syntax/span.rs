//! Document positions and spans
//!
//! Offsets and columns are byte offsets (UTF-8 code units) into the
//! document text, the same unit the host uses to address its buffer.

/// A position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Absolute byte offset from the start of the document
    pub offset: usize,
    /// Zero-based line number
    pub line: usize,
    /// Byte column within the line
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

/// A half-open range of document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Where this span starts (inclusive)
    pub start: Position,
    /// Where this span ends (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a span on a single line from byte offsets.
    ///
    /// `line_start` is the offset of the first byte of `line`.
    pub fn on_line(line: usize, line_start: usize, start: usize, end: usize) -> Self {
        let end = end.max(start);
        Self {
            start: Position::new(start, line, start - line_start),
            end: Position::new(end, line, end - line_start),
        }
    }

    /// Check if this span contains a byte offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start.offset >= self.end.offset
    }

    /// The covered text
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        document
            .get(self.start.offset..self.end.offset)
            .unwrap_or_default()
    }
}
