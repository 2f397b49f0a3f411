//! Scanner for the lot language
//!
//! Splits source text into tokens with one character of lookahead:
//! - whitespace (space, tab, CR, LF) separates tokens and is otherwise insignificant
//! - a letter or underscore starts a word, which runs until the next whitespace (so `KA-01-HH-1234` is one word)
//! - a digit starts an integer, which runs while digits continue
//! - anything else is a single-character `Illegal` token
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and keyword classification

pub mod tokens;

pub use tokens::{Token, TokenKind, lookup};

use crate::ast::Span;

// ============================================================================
// SCANNER STATE
// ============================================================================

/// Scanner for lot source code.
///
/// Each call to [`Scanner::next_token`] returns the next token. Once the input is exhausted every further call returns an
/// `Eof` token positioned at the end of the source.
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of the next unread character.
    offset: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.offset;

        let Some(c) = self.peek() else {
            return Token::new(TokenKind::Eof, Span::new(start, start), String::new());
        };

        let kind = if is_letter(c) {
            self.scan_word();
            lookup(&self.source[start..self.offset])
        } else if c.is_ascii_digit() {
            self.scan_number();
            TokenKind::Int
        } else {
            self.advance();
            TokenKind::Illegal
        };

        Token::new(kind, Span::new(start, self.offset), &self.source[start..self.offset])
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Consume a maximal run of non-whitespace characters.
    fn scan_word(&mut self) {
        while self.peek().is_some_and(|c| !is_whitespace(c)) {
            self.advance();
        }
    }

    /// Consume a maximal run of decimal digits.
    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yield every token before `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof { None } else { Some(token) }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start a word (ASCII-only).
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Convenience function to scan a whole source string.
///
/// The returned stream always ends with exactly one `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_end {
            break;
        }
    }
    tracing::trace!(token_count = tokens.len(), "scanned source");
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
