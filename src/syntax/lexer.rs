//! Line-oriented lexer for block-style YAML
//!
//! The lexer walks the document one line at a time. At the start of a
//! line it tries the line-initial shapes (key, sequence marker, comment).
//! If one matches, the rest of the line is scanned for bare markers,
//! same-line keys and trailing comments. Lines with no line-initial shape
//! (scalar continuations, blank lines) produce no tokens.
//!
//! Tokens come out lazily through [`Iterator`]. A lexer can be cloned to
//! fork the scan, or [`Lexer::restart`]ed to scan again from the top.

use super::language::{yaml, LanguageDefinition};
use super::rules::RuleScope;
use super::span::Span;
use super::tokens::{Token, TokenKind};

/// Where the lexer is within the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Nothing scanned on this line yet
    LineStart,
    /// Scanning after a token; `after_marker` is set when only whitespace
    /// separates `cursor` from the last hyphen
    Inline { cursor: usize, after_marker: bool },
    /// Nothing more of interest on this line
    LineEnd,
}

/// Lazy token stream over a document
#[derive(Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    lang: &'static LanguageDefinition,
    /// Zero-based number of the current line
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
    mode: Mode,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lang: yaml(),
            line: 0,
            line_start: 0,
            mode: Mode::LineStart,
            done: false,
        }
    }

    /// Rewind to the start of the document
    pub fn restart(&mut self) {
        self.line = 0;
        self.line_start = 0;
        self.mode = Mode::LineStart;
        self.done = false;
    }

    /// The current line without its terminator (`\n` or `\r\n`)
    fn current_line(&self) -> &'a str {
        let text = self.text;
        let rest = &text[self.line_start..];
        let line = match rest.find('\n') {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Move to the next line, or finish if this was the last one
    fn advance_line(&mut self) {
        match self.text[self.line_start..].find('\n') {
            Some(idx) => {
                self.line_start += idx + 1;
                self.line += 1;
                self.mode = Mode::LineStart;
            }
            None => self.done = true,
        }
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        Token::new(
            kind,
            Span::on_line(self.line, self.line_start, self.line_start + start, self.line_start + end),
        )
    }

    /// Try the line-initial shapes
    fn scan_line_start(&mut self, line: &str) -> Option<Token> {
        let Some((kind, start, end)) = self.lang.match_at(RuleScope::LineStart, line, 0) else {
            self.mode = Mode::LineEnd;
            return None;
        };

        self.mode = match kind {
            TokenKind::Comment => Mode::LineEnd,
            // Resume after the colon
            TokenKind::Key => Mode::Inline { cursor: end + 1, after_marker: false },
            _ => Mode::Inline { cursor: end, after_marker: true },
        };
        Some(self.token(kind, start, end))
    }

    /// Scan the remainder of a line after its first token
    fn scan_inline(&mut self, line: &str, mut cursor: usize, mut after_marker: bool) -> Option<Token> {
        let bytes = line.as_bytes();
        loop {
            while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }
            if cursor >= bytes.len() {
                self.mode = Mode::LineEnd;
                return None;
            }

            match self.lang.match_at(RuleScope::Inline, line, cursor) {
                Some((TokenKind::Comment, start, end)) => {
                    self.mode = Mode::LineEnd;
                    return Some(self.token(TokenKind::Comment, start, end));
                }
                Some((TokenKind::SequenceKey, start, end)) if after_marker => {
                    self.mode = Mode::Inline { cursor: end + 1, after_marker: false };
                    return Some(self.token(TokenKind::SequenceKey, start, end));
                }
                Some((TokenKind::BareMarker, start, end)) => {
                    self.mode = Mode::Inline { cursor: end, after_marker: true };
                    return Some(self.token(TokenKind::BareMarker, start, end));
                }
                _ => {
                    // Plain value text; skip the word
                    while cursor < bytes.len() && !bytes[cursor].is_ascii_whitespace() {
                        cursor += 1;
                    }
                    after_marker = false;
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.done {
            let line = self.current_line();
            let token = match self.mode {
                Mode::LineStart => self.scan_line_start(line),
                Mode::Inline { cursor, after_marker } => self.scan_inline(line, cursor, after_marker),
                Mode::LineEnd => {
                    self.advance_line();
                    None
                }
            };
            if token.is_some() {
                return token;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        Lexer::new(text).map(|t| t.kind).collect()
    }

    fn texts(text: &str) -> Vec<&str> {
        Lexer::new(text).map(|t| t.span.text(text)).collect()
    }

    #[test]
    fn test_empty_document() {
        assert!(kinds("").is_empty());
        assert!(kinds("\n\n").is_empty());
    }

    #[test]
    fn test_root_keys() {
        let doc = "name: demo\nversion: 1\n";
        assert_eq!(kinds(doc), vec![TokenKind::Key, TokenKind::Key]);
        assert_eq!(texts(doc), vec!["name", "version"]);
    }

    #[test]
    fn test_key_positions() {
        let doc = "a:\n  b: 1\n";
        let tokens: Vec<Token> = Lexer::new(doc).collect();
        assert_eq!(tokens[1].line(), 1);
        assert_eq!(tokens[1].column(), 2);
        assert_eq!(tokens[1].span.start.offset, 5);
        assert_eq!(tokens[1].span.end.offset, 6);
    }

    #[test]
    fn test_sequence_with_key() {
        let doc = "- name: x\n";
        assert_eq!(kinds(doc), vec![TokenKind::SequenceMarker, TokenKind::SequenceKey]);
        assert_eq!(texts(doc), vec!["-", "name"]);
    }

    #[test]
    fn test_nested_markers() {
        let doc = "- - - item\n";
        assert_eq!(
            kinds(doc),
            vec![TokenKind::SequenceMarker, TokenKind::BareMarker, TokenKind::BareMarker]
        );
        assert_eq!(
            kinds("- - key: 1"),
            vec![TokenKind::SequenceMarker, TokenKind::BareMarker, TokenKind::SequenceKey]
        );
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(kinds("# top\n  # key: value\n"), vec![TokenKind::Comment, TokenKind::Comment]);
        assert_eq!(texts("  # key: value"), vec!["# key: value"]);
    }

    #[test]
    fn test_trailing_tokens_after_key() {
        // The classifier drops these; the lexer still reports them
        assert_eq!(kinds("foo: bar # note"), vec![TokenKind::Key, TokenKind::Comment]);
        assert_eq!(
            kinds("foo: a - b: c"),
            vec![TokenKind::Key, TokenKind::BareMarker, TokenKind::SequenceKey]
        );
    }

    #[test]
    fn test_value_text_is_skipped() {
        assert_eq!(kinds("- plain value: with colon"), vec![TokenKind::SequenceMarker]);
        assert!(kinds("just some text\n  more text - here").is_empty());
        assert_eq!(kinds("- a#b"), vec![TokenKind::SequenceMarker]);
    }

    #[test]
    fn test_crlf_lines() {
        let doc = "a:\r\n  - b:\r\n";
        assert_eq!(texts(doc), vec!["a", "-", "b"]);
        let tokens: Vec<Token> = Lexer::new(doc).collect();
        assert_eq!(tokens[1].line(), 1);
        assert_eq!(tokens[1].column(), 2);
    }

    #[test]
    fn test_lone_marker_line() {
        assert_eq!(
            kinds("-\n  key: 1"),
            vec![TokenKind::SequenceMarker, TokenKind::Key]
        );
    }

    #[test]
    fn test_restart_and_fork() {
        let doc = "a: 1\nb: 2\n";
        let mut lexer = Lexer::new(doc);
        let first = lexer.next();
        let fork = lexer.clone();
        assert_eq!(lexer.count(), 1);
        assert_eq!(fork.count(), 1);

        let mut lexer = Lexer::new(doc);
        lexer.by_ref().for_each(drop);
        lexer.restart();
        assert_eq!(lexer.next(), first);
    }
}
