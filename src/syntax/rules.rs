//! Pattern rules for the YAML lexer
//!
//! A rule pairs an anchored regex with the token kind it produces.
//! Rules are tried in priority order (highest first) and the first rule
//! matching at the scan position wins.

use regex::Regex;

use super::tokens::TokenKind;

/// Where on a line a rule is allowed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Only at the first byte of a line (leading whitespace is part of the pattern)
    LineStart,
    /// Anywhere after the line-initial token
    Inline,
}

/// A single-line pattern rule
///
/// The pattern must be anchored with `^`; capture group 1 is the token
/// text. Anything the pattern consumes after the group (a colon and the
/// whitespace after it) acts as lookahead only.
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Where the rule applies
    pub scope: RuleScope,
    /// Priority (higher = matched first)
    pub priority: i32,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(
        name: &str,
        pattern: &str,
        kind: TokenKind,
        scope: RuleScope,
        priority: i32,
    ) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            kind,
            scope,
            priority,
        })
    }

    /// Match the rule exactly at `start`
    ///
    /// Returns the bounds of the token text (capture group 1) relative
    /// to `text`.
    pub fn match_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let rest = text.get(start..)?;
        let caps = self.pattern.captures(rest)?;
        let token = caps.get(1)?;
        Some((start + token.start(), start + token.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_rule() -> PatternRule {
        PatternRule::new(
            "key",
            r"^\s*([A-Za-z0-9_][A-Za-z0-9_:-]*):(?:\s|$)",
            TokenKind::Key,
            RuleScope::LineStart,
            100,
        )
        .unwrap()
    }

    #[test]
    fn test_match_at_line_start() {
        let rule = key_rule();
        assert_eq!(rule.match_at("  name: value", 0), Some((2, 6)));
        assert_eq!(rule.match_at("name:", 0), Some((0, 4)));
        assert_eq!(rule.match_at("url: http://x", 0), Some((0, 3)));
    }

    #[test]
    fn test_match_at_offset() {
        let rule = PatternRule::new(
            "sequence_key",
            r"^([A-Za-z0-9_][A-Za-z0-9_-]*):(?:\s|$)",
            TokenKind::SequenceKey,
            RuleScope::Inline,
            50,
        )
        .unwrap();
        assert_eq!(rule.match_at("- item: 1", 2), Some((2, 6)));
        assert_eq!(rule.match_at("- item: 1", 0), None);
        assert_eq!(rule.match_at("- item: 1", 40), None);
    }

    #[test]
    fn test_colon_needs_whitespace_after() {
        let rule = key_rule();
        assert_eq!(rule.match_at("a:b", 0), None);
        assert_eq!(rule.match_at("a:b: c", 0), Some((0, 3)));
        assert_eq!(rule.match_at("-a: 1", 0), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new("bad", r"(", TokenKind::Key, RuleScope::Inline, 0).is_none());
    }
}
