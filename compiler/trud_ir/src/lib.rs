//! Trud IR - shared front-end data types
//!
//! This crate contains the data shapes passed between the TrudWave stages:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes built by the parser and walked by the evaluator
//!
//! Everything here is plain data; no stage logic lives in this crate.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Expr, ExprKind, FunctionDecl, Ident, MatchCase, MatchExpr, Program, Statement,
    StmtKind, UnaryOp,
};
pub use span::Span;
pub use token::{Token, TokenKind};
