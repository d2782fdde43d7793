//! Evaluation errors.
//!
//! Every runtime failure is an [`EvalError`] carrying a structured
//! [`EvalErrorKind`]. Errors are built through the `#[cold]` constructors
//! at the bottom of this module; the interpreter then attaches the span of
//! the failing expression and, inside a call, a backtrace.

use std::fmt;

use trud_diagnostic::{Diagnostic, ErrorCode};
use trud_ir::{BinaryOp, Span, UnaryOp};

use crate::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UndefinedVariable {
        name: String,
    },
    NotCallable {
        type_name: &'static str,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    InvalidBinaryOp {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    InvalidUnaryOp {
        op: UnaryOp,
        operand: &'static str,
    },
    NonBoolCondition {
        type_name: &'static str,
    },
    NoMatchingCase,
    /// The call stack grew past its configured limit.
    StackOverflow {
        depth: usize,
    },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::NotCallable { .. } => ErrorCode::E6002,
            Self::ArityMismatch { .. } => ErrorCode::E6003,
            Self::InvalidBinaryOp { .. } => ErrorCode::E6004,
            Self::InvalidUnaryOp { .. } => ErrorCode::E6005,
            Self::NonBoolCondition { .. } => ErrorCode::E6006,
            Self::NoMatchingCase => ErrorCode::E6007,
            Self::StackOverflow { .. } => ErrorCode::E6031,
        }
    }

    /// Concise label for the primary span.
    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "not found in this scope",
            Self::NotCallable { .. } => "not callable",
            Self::ArityMismatch { .. } => "wrong number of arguments",
            Self::InvalidBinaryOp { .. } => "operator not supported for these types",
            Self::InvalidUnaryOp { .. } => "operator not supported for this type",
            Self::NonBoolCondition { .. } => "expected bool",
            Self::NoMatchingCase => "no clause applies",
            Self::StackOverflow { .. } => "recursion limit exceeded",
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NoMatchingCase => {
                Some("add an `otherwise` clause to cover remaining cases".to_string())
            }
            Self::StackOverflow { .. } => {
                Some("check the recursion for a missing base case, or raise --max-depth".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable or function \"{name}\" not found")
            }
            Self::NotCallable { type_name } => write!(f, "Cannot call non-function type {type_name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(f, "Function \"{name}\" expects {expected} arguments, got {got}"),
            Self::InvalidBinaryOp { op, left, right } => write!(
                f,
                "Binary operator \"{op}\" not defined for types {left} and {right}"
            ),
            Self::InvalidUnaryOp { op, operand } => {
                write!(f, "Unary operator \"{op}\" not defined for type {operand}")
            }
            Self::NonBoolCondition { type_name } => {
                write!(f, "Match condition must evaluate to bool, got {type_name}")
            }
            Self::NoMatchingCase => f.write_str("No match case matched"),
            Self::StackOverflow { depth } => {
                write!(f, "Maximum call depth of {depth} exceeded")
            }
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name.
    pub name: String,
    /// Source location of the call site.
    pub span: Option<Span>,
}

/// Snapshot of the call stack at an error site, most recent call first.
///
/// Deep stacks keep only the innermost frames; `omitted` counts the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
    omitted: usize,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>, omitted: usize) -> Self {
        EvalBacktrace { frames, omitted }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    /// Frames dropped from the outer end of the stack.
    pub fn omitted(&self) -> usize {
        self.omitted
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
        }
        if self.omitted > 0 {
            write!(f, "\n  ... {} more", self.omitted)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location of the failing expression.
    pub span: Option<Span>,
    /// Call stack at the error site, when raised inside a call.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            backtrace: None,
        }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// Attach `backtrace` unless one was captured deeper in the stack.
    #[must_use]
    pub fn or_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() && !backtrace.is_empty() {
            self.backtrace = Some(backtrace);
        }
        self
    }

    /// Fatal errors end the whole session: a REPL must discard its state.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, EvalErrorKind::StackOverflow { .. })
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a `Diagnostic` with the primary span, backtrace note, and
    /// suggestion where one applies.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());

        if let Some(span) = self.span {
            diag = diag.with_label(span, self.kind.primary_label());
        }

        if let Some(bt) = &self.backtrace {
            diag = diag.with_note(format!("call stack:\n{bt}"));
        }

        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }

        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Constructors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidBinaryOp { op, left, right })
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidUnaryOp { op, operand })
}

#[cold]
pub fn non_bool_condition(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NonBoolCondition { type_name })
}

#[cold]
pub fn no_matching_case() -> EvalError {
    EvalError::new(EvalErrorKind::NoMatchingCase)
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth })
}
