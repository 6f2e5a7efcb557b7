//! YAML key classification
//!
//! This module turns YAML text into colored spans:
//! - the lexer finds keys, sequence markers and comments
//! - the classifier assigns each key and marker an indentation bucket
//! - the bucket table groups the resulting spans per palette color

mod bucket;
mod classifier;
mod language;
mod lexer;
mod rules;
mod span;
mod tokens;

pub use bucket::BucketTable;
pub use classifier::{
    bucket_index, classify, classify_into, parse_tab_size, ClassifiedToken, Classifier,
};
pub use language::{is_yaml_document, yaml, LanguageDefinition};
pub use lexer::Lexer;
pub use rules::{PatternRule, RuleScope};
pub use span::{Position, Span};
pub use tokens::{Token, TokenKind};
