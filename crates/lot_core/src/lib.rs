//! Provide the canonical vocabulary of the lot command language.
//!
//! This crate is intentionally small and dependency-free. It is shared by the syntax frontend (which needs keyword
//! spellings to classify lexemes) and by the interpreter (which needs the colour vocabulary and the user-facing
//! messages).
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no AST or storage types.

pub mod errors;
pub mod lang;
