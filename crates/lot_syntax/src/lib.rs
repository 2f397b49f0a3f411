//! Shared syntax frontend for the lot language: scanner, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the interpreter, the interactive shell, and fuzzing.
//!
//! ## Notes
//! - Syntax only: registration numbers and colours are not validated here, and storage is never touched.
//! - Keyword identity comes from the `lot_core::lang::keywords` registry.
//!
//! ## Examples
//! ```rust
//! use lot_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("create_parking_lot 6\nstatus\n");
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
