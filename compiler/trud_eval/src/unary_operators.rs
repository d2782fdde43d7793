//! Unary operator implementations for the evaluator.

use trud_ir::UnaryOp;

use crate::errors::{invalid_unary_op, EvalResult};
use crate::Value;

/// Evaluate a unary operation: `!` on bools, `-` on numbers.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        _ => Err(invalid_unary_op(op, value.type_name())),
    }
}
