//! Source-form rendering of the AST.
//!
//! Output parses back to an equal tree (modulo spans). Function declarations
//! always print in match form, so the sugar and match spellings of the same
//! function render identically.

use std::fmt;

use super::{Expr, ExprKind, FunctionDecl, MatchCase, MatchExpr, Program, Statement, StmtKind};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.body {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::VariableDeclaration {
                var_type,
                name,
                initializer,
            } => write!(f, "{var_type} {name} = {initializer};"),
            StmtKind::FunctionDeclaration(decl) => write!(f, "{decl}"),
            StmtKind::ExpressionStatement { expression } => write!(f, "{expression};"),
            StmtKind::Comment { value } => f.write_str(value),
        }
    }
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for ty in &self.param_types {
            write!(f, "{ty}, ")?;
        }
        write!(f, "{}> {} = {};", self.return_type, self.name, self.body)
    }
}

impl fmt::Display for MatchExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("match ")?;
        if let [only] = self.params.as_slice() {
            f.write_str(&only.name)?;
        } else {
            f.write_str("(")?;
            write_comma_separated(f, self.params.iter().map(|p| &p.name))?;
            f.write_str(")")?;
        }
        f.write_str(" {")?;
        for case in &self.cases {
            write!(f, " {case}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for MatchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.condition {
            Some(cond) => write!(f, "when {cond} -> {};", self.body),
            None => write!(f, "otherwise -> {};", self.body),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::NumericLiteral { raw, .. }
            | ExprKind::StringLiteral { raw, .. }
            | ExprKind::BooleanLiteral { raw, .. } => f.write_str(raw),
            ExprKind::Identifier { name } => f.write_str(name),
            ExprKind::TupleLiteral { elements } => {
                f.write_str("(")?;
                write_comma_separated(f, elements)?;
                f.write_str(")")
            }
            ExprKind::Binary { left, op, right } => {
                // Left-associative: an equal-precedence child only needs
                // parentheses on the right.
                let prec = op.precedence();
                write_operand(f, left, |p| p > prec)?;
                write!(f, " {op} ")?;
                write_operand(f, right, |p| p >= prec)
            }
            ExprKind::Unary { op, operand } => {
                write!(f, "{op}")?;
                write_operand(f, operand, |_| true)
            }
            ExprKind::Call { callee, args } => {
                if matches!(callee.kind, ExprKind::Unary { .. }) {
                    write!(f, "({callee})")?;
                } else {
                    write_operand(f, callee, |_| true)?;
                }
                f.write_str("(")?;
                write_comma_separated(f, args)?;
                f.write_str(")")
            }
            ExprKind::Match(m) => write!(f, "{m}"),
        }
    }
}

/// Write `expr`, parenthesized if it is a binary expression whose
/// precedence satisfies `needs_parens`.
fn write_operand(
    f: &mut fmt::Formatter<'_>,
    expr: &Expr,
    needs_parens: impl Fn(u8) -> bool,
) -> fmt::Result {
    match &expr.kind {
        ExprKind::Binary { op, .. } if needs_parens(op.precedence()) => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}

fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
