//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch on the operand pair. Both operands are
//! already evaluated: `&&` and `||` do not short-circuit.

use trud_ir::BinaryOp;

use crate::errors::{invalid_binary_op, EvalResult};
use crate::Value;

/// Evaluate a binary operation.
///
/// Numbers support arithmetic, comparison and `==`; bools support `&&`,
/// `||` and `==`; strings support `+` (concatenation) and `==`. Every
/// other combination is an `InvalidBinaryOp` error naming both types.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let result = match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        _ => None,
    };
    result.ok_or_else(|| invalid_binary_op(op, left.type_name(), right.type_name()))
}

/// IEEE-754 semantics throughout: `1 / 0` is `inf`, `0 / 0` is `NaN`.
#[expect(
    clippy::float_cmp,
    reason = "`==` on numbers is exact IEEE equality by definition"
)]
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> Option<Value> {
    Some(match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::And | BinaryOp::Or => return None,
    })
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> Option<Value> {
    match op {
        BinaryOp::And => Some(Value::Bool(a && b)),
        BinaryOp::Or => Some(Value::Bool(a || b)),
        BinaryOp::Eq => Some(Value::Bool(a == b)),
        _ => None,
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Option<Value> {
    match op {
        BinaryOp::Add => {
            let mut s = String::with_capacity(a.len() + b.len());
            s.push_str(a);
            s.push_str(b);
            Some(Value::string(s))
        }
        BinaryOp::Eq => Some(Value::Bool(a == b)),
        _ => None,
    }
}
