//! Statement nodes.

use std::rc::Rc;

use super::{Expr, MatchExpr};
use crate::Span;

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub kind: StmtKind,
    pub span: Span,
}

impl Statement {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Statement { kind, span }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `number x = expr;`
    VariableDeclaration {
        var_type: String,
        name: String,
        initializer: Expr,
    },

    /// `<T1, ..., Tn> name(params) = expr;` or `<T1, ..., Tn> name = match ...;`
    FunctionDeclaration(FunctionDecl),

    /// `expr;`
    ExpressionStatement { expression: Expr },

    /// `// text`, the full token text including the slashes.
    Comment { value: String },
}

/// A top-level function declaration.
///
/// Declared types are recorded but never checked.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub param_types: Vec<String>,
    pub return_type: String,
    pub params: Vec<String>,
    /// Always a match: the sugar form is wrapped in a single catch-all clause.
    pub body: Rc<MatchExpr>,
}

/// A parsed source file.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}
