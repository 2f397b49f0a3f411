//! Syntax errors produced while parsing lot source.
//!
//! Every error carries the offending literal and its byte span so callers can either print the one-line message
//! (interactive shell) or render the source context (batch mode, see the CLI's miette integration).

use std::fmt;

use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};

/// What went wrong at a syntax error site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// An operand of the wrong token class (or a missing operand).
    Expected(TokenKind),
    /// A token that cannot start a statement.
    UnexpectedToken,
    /// An integer literal that does not fit in an `i64`.
    InvalidNumber,
}

/// A syntax error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub literal: String,
    pub span: Span,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// `found` was scanned where an operand of class `expected` belongs.
    pub fn expected(found: &Token, expected: TokenKind) -> Self {
        Self::at(
            found,
            SyntaxErrorKind::Expected(expected),
            format!(
                "unexpected token {:?} at pos {}, expecting {}",
                found.literal,
                found.pos(),
                expected
            ),
        )
    }

    /// `found` cannot start a statement.
    pub fn unexpected(found: &Token) -> Self {
        Self::at(
            found,
            SyntaxErrorKind::UnexpectedToken,
            format!("unexpected token {:?} at pos {}", found.literal, found.pos()),
        )
    }

    /// `found` is an integer literal outside the `i64` range.
    pub fn invalid_number(found: &Token) -> Self {
        Self::at(
            found,
            SyntaxErrorKind::InvalidNumber,
            format!("invalid number {:?} at pos {}", found.literal, found.pos()),
        )
    }

    fn at(found: &Token, kind: SyntaxErrorKind, message: String) -> Self {
        Self {
            message,
            literal: found.literal.clone(),
            span: found.span,
            kind,
        }
    }

    /// Byte offset of the offending token.
    pub fn pos(&self) -> usize {
        self.span.start
    }
}

/// All syntax errors collected during one parse attempt. Never empty.
///
/// `Display` joins the messages one per line, which is what the interactive shell prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(Vec<SyntaxError>);

impl ParseErrors {
    /// Wrap collected errors.
    ///
    /// Returns `None` if `errors` is empty, so a `ParseErrors` value always reports at least one failure.
    pub fn new(errors: Vec<SyntaxError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self(errors)) }
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxError> {
        self.0.iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a SyntaxError;
    type IntoIter = std::slice::Iter<'a, SyntaxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
