//! Trud Eval - tree-walking interpreter for TrudWave.
//!
//! # Architecture
//!
//! - `Value`: runtime values (`Number`, `Str`, `Bool`, `Null`, `Tuple`, `Function`)
//! - `Environment`: one global scope plus at most one flat local scope per call
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `CallStack`: call frames for recursion limits and backtraces
//! - `Interpreter`: walks a parsed `Program` statement by statement

mod diagnostics;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Environment, Scope};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Value};

use trud_ir::Program;

/// Evaluate a program against a fresh global environment.
///
/// Returns the value of the last statement, or `Null` for an empty program.
pub fn evaluate(program: &Program) -> EvalResult {
    Interpreter::new().evaluate(program)
}
