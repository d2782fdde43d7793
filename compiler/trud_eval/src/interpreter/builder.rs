//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::diagnostics::CallStack;
use crate::Environment;

/// Builder for `Interpreter`.
///
/// ```ignore
/// let interp = InterpreterBuilder::new().max_call_depth(Some(500)).build();
/// ```
pub struct InterpreterBuilder {
    max_call_depth: Option<usize>,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Recursion limit; `None` for unlimited.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: Environment::new(),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}
