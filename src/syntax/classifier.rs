//! Indentation classifier
//!
//! Assigns every key and sequence marker a color bucket derived from its
//! indentation, without parsing the document. Tokens come from the
//! [`Lexer`]; a small [`ScanState`] carries the indentation of the last
//! classified token, the stack of enclosing sequences, and the last line
//! whose key was already colored.
//!
//! Indentation policy:
//! - a line-initial key or marker sits at its own column
//! - a key written on the same line as its marker (`- key:`) sits half a
//!   tab step after the marker, which puts it one bucket further
//! - a hyphen following another hyphen (`- - item`) sits a full tab step
//!   after the previous one
//!
//! Once a key has been colored, nothing else on its line is (trailing
//! comments, hyphens inside values).

use super::bucket::BucketTable;
use super::lexer::Lexer;
use super::span::Span;
use super::tokens::{Token, TokenKind};

/// Bucket for a token at `indent` columns: `round(indent / tab_size)`
/// modulo the palette size. A tab size of zero means "unknown" and
/// routes everything to bucket 0.
pub fn bucket_index(indent: usize, tab_size: usize, palette_len: usize) -> usize {
    if tab_size == 0 || palette_len == 0 {
        return 0;
    }
    // Round half up without overflow: 2 * rem >= tab_size
    let rem = indent % tab_size;
    let level = indent / tab_size + usize::from(rem >= tab_size - rem);
    level % palette_len
}

/// Parse a host tab-size setting. Anything that isn't a number means unset (0).
pub fn parse_tab_size(raw: &str) -> usize {
    raw.trim().parse().unwrap_or(0)
}

/// A token with its color assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub kind: TokenKind,
    pub span: Span,
    /// Indentation the bucket was computed from
    pub indent: usize,
    /// Number of enclosing block sequences
    pub depth: usize,
    /// Color bucket in `[0, palette_len)`
    pub bucket: usize,
}

/// Per-pass scan state
#[derive(Debug)]
struct ScanState {
    tab_size: usize,
    palette_len: usize,
    /// Indentation of the most recently classified token
    current_indent: usize,
    /// Columns of the enclosing sequences, innermost last
    sequences: Vec<usize>,
    /// Line whose key has been classified
    processed_line: Option<usize>,
}

impl ScanState {
    fn new(tab_size: usize, palette_len: usize) -> Self {
        Self {
            tab_size,
            palette_len: palette_len.max(1),
            current_indent: 0,
            sequences: Vec::new(),
            processed_line: None,
        }
    }

    fn depth(&self) -> usize {
        self.sequences.len()
    }

    /// Offset of a same-line key from its marker
    fn sequence_key_offset(&self) -> usize {
        self.tab_size.div_ceil(2)
    }

    /// Offset of a hyphen from the hyphen before it
    fn bare_marker_offset(&self) -> usize {
        self.tab_size
    }

    /// Record a sequence at `column`, dropping any deeper ones
    fn enter_sequence(&mut self, column: usize) {
        while self.sequences.last().is_some_and(|&open| open > column) {
            self.sequences.pop();
        }
        if self.sequences.last() != Some(&column) {
            self.sequences.push(column);
        }
    }

    /// A key at `column` closes every sequence at or right of it
    fn leave_sequences(&mut self, column: usize) {
        while self.sequences.last().is_some_and(|&open| open >= column) {
            self.sequences.pop();
        }
    }

    /// Classify one token, or `None` if it must not be colored
    fn classify(&mut self, token: Token) -> Option<ClassifiedToken> {
        if token.kind == TokenKind::Comment || self.processed_line == Some(token.line()) {
            return None;
        }

        let indent = match token.kind {
            TokenKind::Key => {
                self.leave_sequences(token.column());
                token.column()
            }
            TokenKind::SequenceMarker => {
                // The token is the hyphen itself, so the width of "- " is
                // already excluded
                self.enter_sequence(token.column());
                token.column()
            }
            TokenKind::BareMarker => {
                let indent = self.current_indent.saturating_add(self.bare_marker_offset());
                self.enter_sequence(indent);
                indent
            }
            TokenKind::SequenceKey if self.depth() > 0 => {
                self.current_indent.saturating_add(self.sequence_key_offset())
            }
            TokenKind::SequenceKey => token.column(),
            TokenKind::Comment => return None,
        };

        self.current_indent = indent;
        if token.kind.is_key() {
            self.processed_line = Some(token.line());
        }

        Some(ClassifiedToken {
            kind: token.kind,
            span: token.span,
            indent,
            depth: self.depth(),
            bucket: bucket_index(indent, self.tab_size, self.palette_len),
        })
    }
}

/// Lazy stream of classified tokens over one document
pub struct Classifier<'a> {
    tokens: Lexer<'a>,
    state: ScanState,
}

impl<'a> Classifier<'a> {
    /// Start a classification pass. `tab_size` 0 means unknown.
    pub fn new(text: &'a str, tab_size: usize, palette_len: usize) -> Self {
        Self {
            tokens: Lexer::new(text),
            state: ScanState::new(tab_size, palette_len),
        }
    }
}

impl Iterator for Classifier<'_> {
    type Item = ClassifiedToken;

    fn next(&mut self) -> Option<ClassifiedToken> {
        for token in self.tokens.by_ref() {
            if let Some(classified) = self.state.classify(token) {
                return Some(classified);
            }
        }
        None
    }
}

/// Classify a whole document into a fresh table
pub fn classify(text: &str, tab_size: usize, palette_len: usize) -> BucketTable {
    let mut table = BucketTable::new(palette_len);
    classify_into(&mut table, text, tab_size);
    table
}

/// Classify a whole document, appending to an existing table. The
/// table's bucket count is the palette size.
pub fn classify_into(table: &mut BucketTable, text: &str, tab_size: usize) {
    let mut count = 0;
    for token in Classifier::new(text, tab_size, table.bucket_count()) {
        log::trace!(
            "{} at {}:{} indent {} depth {} -> bucket {}",
            token.kind.name(),
            token.span.start.line,
            token.span.start.column,
            token.indent,
            token.depth,
            token.bucket
        );
        table.push(token.bucket, token.span);
        count += 1;
    }
    log::debug!(
        "Classified {} spans into {} buckets (tab size {})",
        count,
        table.bucket_count(),
        tab_size
    );
}
