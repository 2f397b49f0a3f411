//! Parser for the lot language
//!
//! Converts a token stream into a [`Program`]: a flat list of statements, each a keyword followed by its operands.
//!
//! ## Examples
//!
//! ```rust
//! use lot_syntax::{ast::Statement, lexer, parser};
//!
//! let tokens = lexer::lex("park KA-01-HH-1234 White\n");
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(
//!     program.statements[0].node,
//!     Statement::Park { registration_number: "KA-01-HH-1234".into(), colour: "White".into() }
//! );
//! ```

use crate::ast::*;
use crate::diagnostics::{ParseErrors, SyntaxError};
use crate::lexer::{self, Token, TokenKind};
use lot_core::lang::keywords::KeywordId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each concern in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
