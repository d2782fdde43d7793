//! Diagnostic emitters.
//!
//! Only a terminal emitter exists; the trait is the seam a JSON or LSP
//! emitter would plug into.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Renders diagnostics to some output.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
