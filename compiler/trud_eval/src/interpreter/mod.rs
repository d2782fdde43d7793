//! Tree-walking interpreter.
//!
//! Statements run in order against the interpreter's global scope. A call
//! pushes a frame on the `CallStack`, swaps in a fresh local scope holding
//! the parameters, evaluates the function's match body, then restores the
//! caller's scope and pops the frame whether or not the body succeeded.

mod builder;

pub use builder::InterpreterBuilder;

use trud_ir::{Expr, ExprKind, MatchExpr, Program, Span, Statement, StmtKind};
use trud_stack::ensure_sufficient_stack;

use crate::diagnostics::{CallFrame, CallStack};
use crate::errors::{
    arity_mismatch, no_matching_case, non_bool_condition, not_callable, undefined_variable,
    EvalResult,
};
use crate::{evaluate_binary, evaluate_unary, Environment, FunctionValue, Scope, Value};

/// Call depth allowed before `StackOverflow` when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Interpreter state: the environment and the live call stack.
pub struct Interpreter {
    env: Environment,
    call_stack: CallStack,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter with an empty environment and the default depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Top-level bindings made so far.
    pub fn globals(&self) -> &Scope {
        self.env.globals()
    }

    /// `None` means unlimited.
    pub fn max_call_depth(&self) -> Option<usize> {
        self.call_stack.max_depth()
    }

    /// Forget every binding.
    pub fn reset(&mut self) {
        self.env.clear();
        self.call_stack.clear();
    }

    /// Run every statement in order; the result is the last statement's
    /// value, or `Null` for an empty program.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
    pub fn evaluate(&mut self, program: &Program) -> EvalResult {
        let mut last = Value::Null;
        for stmt in &program.body {
            last = self.eval_statement(stmt)?;
        }
        Ok(last)
    }

    /// Run one statement against the persistent global scope.
    ///
    /// A declaration evaluates to the value it binds. If the initializer
    /// fails, nothing is bound.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_statement(&mut self, stmt: &Statement) -> EvalResult {
        match &stmt.kind {
            StmtKind::VariableDeclaration {
                name, initializer, ..
            } => {
                let value = self.eval_expr(initializer)?;
                self.env.define_global(name.as_str(), value.clone());
                Ok(value)
            }
            StmtKind::FunctionDeclaration(decl) => {
                let func = Value::function(FunctionValue::new(
                    decl.name.as_str(),
                    decl.params.clone(),
                    decl.body.clone(),
                ));
                self.env.define_global(decl.name.as_str(), func.clone());
                Ok(func)
            }
            StmtKind::ExpressionStatement { expression } => self.eval_expr(expression),
            StmtKind::Comment { .. } => Ok(Value::Null),
        }
    }

    /// Evaluate an expression. Errors without a location get `expr.span`.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr)).map_err(|e| e.or_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::NumericLiteral { value, .. } => Ok(Value::Number(*value)),
            ExprKind::StringLiteral { value, .. } => Ok(Value::string(value.as_str())),
            ExprKind::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
            ExprKind::TupleLiteral { elements } => {
                let values = elements
                    .iter()
                    .map(|e| self.eval_expr(e))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::tuple(values))
            }
            ExprKind::Identifier { name } => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
            ExprKind::Binary { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, *op)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, *op)
            }
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr.span),
            // A bare match is a function value; no clause runs until it is called.
            ExprKind::Match(m) => Ok(Value::function(FunctionValue::anonymous(m.clone()))),
        }
    }

    fn eval_call(&mut self, callee: &Expr, args: &[Expr], span: Span) -> EvalResult {
        let func = match self.eval_expr(callee)? {
            Value::Function(func) => func,
            other => return Err(not_callable(other.type_name())),
        };
        let args = args
            .iter()
            .map(|a| self.eval_expr(a))
            .collect::<EvalResult<Vec<_>>>()?;
        self.call_function(&func, args, Some(span))
    }

    /// Call `func` with already-evaluated arguments.
    ///
    /// The body sees the parameters and the globals only. Errors leaving
    /// the body carry a backtrace of the call stack at the failure point.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = %func.name, depth = self.call_stack.depth())
    )]
    pub fn call_function(
        &mut self,
        func: &FunctionValue,
        args: Vec<Value>,
        call_span: Option<Span>,
    ) -> EvalResult {
        if args.len() != func.arity() {
            return Err(arity_mismatch(&func.name, func.arity(), args.len()));
        }

        self.call_stack
            .push(CallFrame {
                name: func.name.clone(),
                call_span,
            })
            .map_err(|e| self.call_stack.attach_backtrace(e))?;

        let locals: Scope = func.params.iter().cloned().zip(args).collect();
        let saved = self.env.enter_local(locals);
        let result = ensure_sufficient_stack(|| self.eval_match(&func.body))
            .map_err(|e| self.call_stack.attach_backtrace(e));
        self.env.restore_local(saved);
        self.call_stack.pop();

        result
    }

    /// Try clauses top to bottom; a catch-all is taken, a condition must be
    /// a bool and the first `true` wins.
    fn eval_match(&mut self, m: &MatchExpr) -> EvalResult {
        for case in &m.cases {
            let Some(condition) = &case.condition else {
                return self.eval_expr(&case.body);
            };
            match self.eval_expr(condition)? {
                Value::Bool(true) => return self.eval_expr(&case.body),
                Value::Bool(false) => {}
                other => {
                    return Err(non_bool_condition(other.type_name()).or_span(condition.span))
                }
            }
        }
        Err(no_matching_case().or_span(m.span))
    }
}

#[cfg(test)]
mod tests;
