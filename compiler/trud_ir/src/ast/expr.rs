//! Expression nodes.

use std::rc::Rc;

use super::{BinaryOp, UnaryOp};
use crate::Span;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `42`, `3.14`
    NumericLiteral { value: f64, raw: String },

    /// `"text"`; `value` has escapes resolved, `raw` keeps the quotes.
    StringLiteral { value: String, raw: String },

    /// `true`, `false`
    BooleanLiteral { value: bool, raw: String },

    /// `(a, b, ...)`, at least two elements.
    TupleLiteral { elements: Vec<Expr> },

    Identifier { name: String },

    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `callee(args)`
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// `match (params) { clauses }`
    ///
    /// Shared with the function values built from it, so calls never clone
    /// the body.
    Match(Rc<MatchExpr>),
}

/// A `match` expression: parameter list plus guarded clauses.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchExpr {
    pub params: Vec<Ident>,
    /// Tried top to bottom.
    pub cases: Vec<MatchCase>,
    pub span: Span,
}

impl MatchExpr {
    /// Single catch-all clause over `params`, used for `f(a, b) = expr;`.
    pub fn catch_all(params: Vec<Ident>, body: Expr) -> Self {
        let span = body.span;
        MatchExpr {
            params,
            cases: vec![MatchCase {
                condition: None,
                body,
                span,
            }],
            span,
        }
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

/// `when cond -> body;` or, with `condition: None`, `otherwise -> body;`.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchCase {
    pub condition: Option<Expr>,
    pub body: Expr,
    pub span: Span,
}

/// A name in binding position (match parameters).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}
