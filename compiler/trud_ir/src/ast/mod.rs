//! AST node types.
//!
//! Boxed tree with `Rc`-shared match bodies. Every statement and expression
//! carries the span it was parsed from.

mod display;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Ident, MatchCase, MatchExpr};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{FunctionDecl, Program, Statement, StmtKind};
