//! Parse errors.
//!
//! - `ParseError`: what went wrong (`ParseErrorKind`) and where (`span`)
//! - `ErrorContext`: what the parser was working on, for
//!   "while parsing X" notes

use std::fmt;

use trud_diagnostic::{Diagnostic, ErrorCode};
use trud_ir::{Span, Token, TokenKind};
use trud_lexer::LexError;

/// Context describing what was being parsed when an error occurred.
///
/// ```ignore
/// self.in_error_context(ErrorContext::MatchExpression, |p| p.parse_match_inner())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    VariableDeclaration,
    FunctionDeclaration,
    /// The `<T1, ..., Tn>` list of a function declaration.
    TypeList,
    /// `(a, b)` after a function name or `match`.
    ParameterList,
    ExpressionStatement,
    MatchExpression,
    MatchClause,
    CallArguments,
    /// `( ... )`: a grouping or a tuple literal.
    Parenthesized,
}

impl ErrorContext {
    /// Noun phrase used in "while parsing X".
    pub fn description(self) -> &'static str {
        match self {
            Self::VariableDeclaration => "a variable declaration",
            Self::FunctionDeclaration => "a function declaration",
            Self::TypeList => "a function type list",
            Self::ParameterList => "a parameter list",
            Self::ExpressionStatement => "an expression statement",
            Self::MatchExpression => "a match expression",
            Self::MatchClause => "a match clause",
            Self::CallArguments => "call arguments",
            Self::Parenthesized => "a parenthesized expression",
        }
    }
}

/// What kind of parse error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer rejected the input.
    Lex(LexError),
    /// `expect` saw the wrong token. `text` is set when a specific spelling
    /// was required (`>` of a type list).
    ExpectedToken {
        expected: TokenKind,
        text: Option<&'static str>,
        found: TokenKind,
        found_text: String,
    },
    /// No expression starts with this token.
    UnexpectedToken { found: TokenKind, text: String },
    /// Input ended early.
    UnexpectedEof { expected: String },
    /// `< >` with no types at all.
    MissingReturnType,
    /// Something other than `when`/`otherwise` inside a match block.
    ExpectedClause { found: TokenKind, text: String },
    /// A number literal too large to represent.
    InvalidNumber { raw: String },
}

/// Parse error with the span of the offending token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Innermost construct being parsed; set by `in_error_context`.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    #[cold]
    pub(crate) fn expected_token(
        expected: TokenKind,
        text: Option<&'static str>,
        found: Token<'_>,
    ) -> Self {
        Self::new(
            ParseErrorKind::ExpectedToken {
                expected,
                text,
                found: found.kind,
                found_text: found.text.to_string(),
            },
            found.span,
        )
    }

    #[cold]
    pub(crate) fn unexpected_token(found: Token<'_>) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.kind,
                text: found.text.to_string(),
            },
            found.span,
        )
    }

    #[cold]
    pub(crate) fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.into(),
            },
            span,
        )
    }

    #[cold]
    pub(crate) fn expected_clause(found: Token<'_>) -> Self {
        Self::new(
            ParseErrorKind::ExpectedClause {
                found: found.kind,
                text: found.text.to_string(),
            },
            found.span,
        )
    }

    /// Attach `context` unless an inner construct already did.
    #[must_use]
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.code(),
            ParseErrorKind::ExpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1002,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1003,
            ParseErrorKind::MissingReturnType => ErrorCode::E1004,
            ParseErrorKind::ExpectedClause { .. } => ErrorCode::E1005,
            ParseErrorKind::InvalidNumber { .. } => ErrorCode::E1006,
        }
    }

    /// Short text for the primary label.
    fn label(&self) -> String {
        match &self.kind {
            ParseErrorKind::Lex(_) => "here".to_string(),
            ParseErrorKind::ExpectedToken {
                text: Some(text), ..
            } => format!("expected '{text}'"),
            ParseErrorKind::ExpectedToken { expected, .. } => format!("expected {expected}"),
            ParseErrorKind::UnexpectedToken { .. } => "expected an expression".to_string(),
            ParseErrorKind::UnexpectedEof { expected } => format!("expected {expected}"),
            ParseErrorKind::MissingReturnType => "type list is empty".to_string(),
            ParseErrorKind::ExpectedClause { .. } => "expected `when` or `otherwise`".to_string(),
            ParseErrorKind::InvalidNumber { .. } => "out of range".to_string(),
        }
    }

    /// Convert to a full Diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match &self.kind {
            ParseErrorKind::Lex(err) => err.to_diagnostic(),
            _ => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span, self.label()),
        };
        match self.context {
            Some(context) => diag.with_note(format!("while parsing {}", context.description())),
            None => diag,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError::new(ParseErrorKind::Lex(err), span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Lex(err) => write!(f, "{err}"),
            ParseErrorKind::ExpectedToken {
                expected,
                text: None,
                found,
                ..
            } => write!(f, "Expected token type {expected}, got {found}"),
            ParseErrorKind::ExpectedToken {
                text: Some(text),
                found,
                found_text,
                ..
            } => write!(f, "Expected '{text}', got {found} {found_text:?}"),
            ParseErrorKind::UnexpectedToken { found, text } => {
                write!(f, "Unexpected token: {found} {text}")
            }
            ParseErrorKind::UnexpectedEof { expected } => {
                write!(f, "Expected {expected}, got end of input")
            }
            ParseErrorKind::MissingReturnType => {
                write!(f, "Function definition must specify return type")
            }
            ParseErrorKind::ExpectedClause { found, text } => {
                write!(f, "Expected 'when' or 'otherwise', got {found} {text}")
            }
            ParseErrorKind::InvalidNumber { raw } => {
                write!(f, "Number literal {raw} is out of range")
            }
        }
    }
}

impl std::error::Error for ParseError {}
