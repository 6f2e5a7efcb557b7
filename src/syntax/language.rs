//! The YAML language definition
//!
//! Holds the pattern rules for every recognized lexical shape, and the
//! file-type check that decides whether a document is YAML at all.

use std::path::Path;
use std::sync::OnceLock;

use super::rules::{PatternRule, RuleScope};
use super::tokens::TokenKind;

/// Identifier characters allowed in a line-initial key. Interior colons
/// are allowed, so `a:b: 1` has the key `a:b`.
const KEY_PATTERN: &str = r"[A-Za-z0-9_][A-Za-z0-9_:-]*";

/// Identifier characters allowed in a key that follows `- `
const SEQUENCE_KEY_PATTERN: &str = r"[A-Za-z0-9_][A-Za-z0-9_-]*";

/// A language definition: file types plus lexer rules
pub struct LanguageDefinition {
    /// Language name
    pub name: String,
    /// Editor language identifiers (lowercase)
    pub language_ids: Vec<String>,
    /// File extensions (lowercase, no dot)
    pub extensions: Vec<String>,
    /// Pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            language_ids: Vec::new(),
            extensions: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Add an editor language identifier
    pub fn add_language_id(&mut self, id: &str) {
        self.language_ids.push(id.to_lowercase());
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_lowercase());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first)
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Rules for one scope, highest priority first
    pub fn rules(&self, scope: RuleScope) -> impl Iterator<Item = &PatternRule> + '_ {
        self.patterns.iter().filter(move |rule| rule.scope == scope)
    }

    /// First rule of the given scope matching exactly at `start`
    pub fn match_at(
        &self,
        scope: RuleScope,
        text: &str,
        start: usize,
    ) -> Option<(TokenKind, usize, usize)> {
        self.rules(scope).find_map(|rule| {
            rule.match_at(text, start)
                .map(|(token_start, token_end)| (rule.kind, token_start, token_end))
        })
    }

    /// Check whether a document belongs to this language, by editor
    /// language id or by file extension
    pub fn matches_document(&self, language_id: Option<&str>, path: Option<&Path>) -> bool {
        if let Some(id) = language_id {
            if self.language_ids.iter().any(|known| known.eq_ignore_ascii_case(id)) {
                return true;
            }
        }

        path.and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

/// Build the YAML definition
fn yaml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("YAML");
    lang.add_language_id("yaml");
    lang.add_extension("yaml");
    lang.add_extension("yml");

    // Line-initial shapes
    if let Some(rule) = PatternRule::new(
        "key",
        &format!(r"^\s*({KEY_PATTERN}):(?:\s|$)"),
        TokenKind::Key,
        RuleScope::LineStart,
        100,
    ) {
        lang.add_pattern(rule);
    }
    // A lone `-` at the end of a line opens an item whose content starts
    // on the next line
    if let Some(rule) = PatternRule::new(
        "sequence",
        r"^\s*(-)(?:\s|$)",
        TokenKind::SequenceMarker,
        RuleScope::LineStart,
        90,
    ) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new(
        "comment",
        r"^\s*(#.*)$",
        TokenKind::Comment,
        RuleScope::LineStart,
        80,
    ) {
        lang.add_pattern(rule);
    }

    // Shapes after the line-initial token
    if let Some(rule) = PatternRule::new(
        "trailing_comment",
        r"^(#.*)$",
        TokenKind::Comment,
        RuleScope::Inline,
        70,
    ) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new(
        "bare_marker",
        r"^(-)(?:\s|$)",
        TokenKind::BareMarker,
        RuleScope::Inline,
        60,
    ) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new(
        "sequence_key",
        &format!(r"^({SEQUENCE_KEY_PATTERN}):(?:\s|$)"),
        TokenKind::SequenceKey,
        RuleScope::Inline,
        50,
    ) {
        lang.add_pattern(rule);
    }

    lang
}

/// Shared YAML definition, compiled on first use
pub fn yaml() -> &'static LanguageDefinition {
    static YAML: OnceLock<LanguageDefinition> = OnceLock::new();
    YAML.get_or_init(yaml_language)
}

/// Check if a document should be colorized: language id `yaml`, or a
/// `.yaml` / `.yml` file
pub fn is_yaml_document(language_id: Option<&str>, path: Option<&Path>) -> bool {
    yaml().matches_document(language_id, path)
}
