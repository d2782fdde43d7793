//! Diagnostic system for error reporting.
//!
//! Every stage error (lexer, parser, evaluator) converts into a
//! [`Diagnostic`]: an error code, a message, the span it points at, and
//! any notes or suggestions.
//!
//! Emitters in [`emitter`] render diagnostics for a terminal, with the
//! offending source line and a caret when the source text is attached.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
