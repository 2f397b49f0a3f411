#![forbid(unsafe_code)]
//! lot: a small command language for running a parking lot
//!
//! Source text is scanned and parsed by `lot_syntax` into a [`ast::Program`], then executed statement by statement
//! against a [`database::Database`] by the [`exec::Executor`]. The `cli` and `shell` modules wire this up to files,
//! pipes and terminals.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: use `.expect("INVARIANT: reason")` with a clear explanation.
//!
//! ## Examples
//! ```rust
//! use lot::database::Database;
//! use lot::exec::Executor;
//! use lot::parser;
//!
//! let program = parser::parse_source("create_parking_lot 1\npark KA-01-HH-1234 White").unwrap();
//! let mut db = Database::in_memory();
//! let mut exec = Executor::new(Vec::new(), Vec::new());
//! exec.execute(&program, &mut db);
//!
//! let (out, _) = exec.into_inner();
//! assert_eq!(String::from_utf8(out).unwrap(), "Created a parking lot with 1 slots\nAllocated slot number: 1\n");
//! ```

pub mod cli;
pub mod database;
pub mod exec;
pub mod shell;
pub mod version;

pub use lot_syntax::ast;
pub use lot_syntax::diagnostics;
pub use lot_syntax::lexer;
pub use lot_syntax::parser;

pub use database::{Car, Database, MemoryStorage, Storage};
pub use exec::Executor;
