//! Token kinds produced by the YAML lexer
//!
//! Each kind corresponds to one lexical shape. The order of the
//! variants is the order in which shapes are tried at a scan position.

use super::span::Span;

/// Lexical shapes recognized in block-style YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Line-initial mapping key (`  name:`)
    Key,
    /// Line-initial sequence marker (`  - `)
    SequenceMarker,
    /// Comment opener (`#`), recognized only to be excluded
    Comment,
    /// Hyphen following another marker on the same line (`- - item`)
    BareMarker,
    /// Key on the same line as its sequence marker (`- name:`)
    SequenceKey,
}

impl TokenKind {
    /// Whether tokens of this kind are mapping keys
    pub fn is_key(&self) -> bool {
        matches!(self, TokenKind::Key | TokenKind::SequenceKey)
    }

    /// Whether tokens of this kind are sequence hyphens
    pub fn is_marker(&self) -> bool {
        matches!(self, TokenKind::SequenceMarker | TokenKind::BareMarker)
    }

    /// Get a human-readable name for this token kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Key => "Key",
            TokenKind::SequenceMarker => "SequenceMarker",
            TokenKind::Comment => "Comment",
            TokenKind::BareMarker => "BareMarker",
            TokenKind::SequenceKey => "SequenceKey",
        }
    }
}

/// A token found by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Text of the token. Keys exclude their colon, markers cover the
    /// hyphen, comments run to the end of the line.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Line the token sits on
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Byte column of the token's first character
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups() {
        assert!(TokenKind::Key.is_key());
        assert!(TokenKind::SequenceKey.is_key());
        assert!(!TokenKind::Comment.is_key());
        assert!(TokenKind::SequenceMarker.is_marker());
        assert!(TokenKind::BareMarker.is_marker());
        assert!(!TokenKind::Key.is_marker());
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Key, Span::on_line(3, 20, 24, 27));
        assert_eq!(token.line(), 3);
        assert_eq!(token.column(), 4);
        assert_eq!(token.kind.name(), "Key");
    }
}
