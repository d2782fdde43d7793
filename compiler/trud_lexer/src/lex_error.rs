//! Lexer error types.

use std::fmt;

use trud_diagnostic::{Diagnostic, ErrorCode};
use trud_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character no token rule accepts (`@`, `#`, a lone `&`).
    UnexpectedCharacter { ch: char },
    /// Missing closing `"` before the end of the line.
    UnterminatedString,
    /// A number running into identifier characters, e.g. `12abc`.
    MalformedNumber,
}

impl LexError {
    #[cold]
    pub(crate) fn unexpected_character(ch: char, start: u32) -> Self {
        let len = u32::try_from(ch.len_utf8()).unwrap_or(1);
        LexError {
            kind: LexErrorKind::UnexpectedCharacter { ch },
            span: Span::new(start, start.saturating_add(len)),
        }
    }

    #[cold]
    pub(crate) fn unterminated_string(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            span,
        }
    }

    #[cold]
    pub(crate) fn malformed_number(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::MalformedNumber,
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::MalformedNumber => ErrorCode::E0003,
        }
    }

    /// Convert to a full Diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => {
                diag.with_label(self.span, "not valid here")
            }
            LexErrorKind::UnterminatedString => diag
                .with_label(self.span, "string starts here")
                .with_note("string literals cannot span lines"),
            LexErrorKind::MalformedNumber => diag
                .with_label(self.span, "not a number")
                .with_suggestion("identifiers cannot start with a digit"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter { ch } => {
                write!(f, "unexpected character {ch:?}")
            }
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::MalformedNumber => write!(f, "malformed number literal"),
        }
    }
}

impl std::error::Error for LexError {}
