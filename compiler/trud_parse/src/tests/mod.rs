//! Parser tests.
//!
//! - `parser`: statements, expressions, precedence, and match forms
//! - `errors`: error kinds, messages, and contexts

mod parser;
