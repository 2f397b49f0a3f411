//! Token types for the lot scanner.
//!
//! The token set is closed and tiny: keywords (registry-backed `KeywordId`s), integer literals, bare words, and the
//! two special kinds `Illegal` and `Eof`.
//!
//! ## Notes
//! - Any word that is not a keyword is a `String` token. Registration numbers and colours pass through the scanner
//!   unvalidated; their shape is checked when a car is constructed.

use std::fmt;

use crate::ast::Span;
use lot_core::lang::keywords::{self, KeywordId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single character that cannot start any token.
    Illegal,
    /// End of input.
    Eof,
    /// A run of decimal digits.
    Int,
    /// A word that is not a keyword.
    String,
    Keyword(KeywordId),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal => f.write_str("ILLEGAL"),
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Int => f.write_str("INT"),
            TokenKind::String => f.write_str("STRING"),
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
        }
    }
}

/// A token with its kind, source span, and literal text.
///
/// `literal` is the exact source slice `span.start..span.end`; it is empty only for `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub literal: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, literal: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            literal: literal.into(),
        }
    }

    /// Byte offset of the token's first character.
    pub fn pos(&self) -> usize {
        self.span.start
    }
}

/// Classify a word lexeme: its keyword kind if reserved, otherwise `String`.
pub fn lookup(lexeme: &str) -> TokenKind {
    match keywords::from_str(lexeme) {
        Some(id) => TokenKind::Keyword(id),
        None => TokenKind::String,
    }
}
