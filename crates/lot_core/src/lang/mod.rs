//! lot language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `ColourId`) and look up spellings and metadata via registry
//! tables, instead of comparing strings all over the scanner, parser and executor.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   rendering, tests).
//!
//! ## Examples
//! ```rust
//! use lot_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("park"), Some(KeywordId::Park));
//! assert_eq!(keywords::as_str(KeywordId::Leave), "leave");
//! ```

pub mod colours;
pub mod keywords;
