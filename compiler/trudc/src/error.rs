//! Pipeline error spanning all three stages.

use std::fmt;

use trud_diagnostic::Diagnostic;
use trud_eval::EvalError;
use trud_lexer::LexError;
use trud_parse::{ParseError, ParseErrorKind};

/// Failure of one pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl Error {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => err.to_diagnostic(),
            Error::Parse(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }

    /// Only runtime recursion overflow is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Eval(err) if err.is_fatal())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "{err}"),
            Error::Parse(err) => write!(f, "{err}"),
            Error::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

/// A lexer failure surfaced through the parser is reported as a lex error.
impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError {
                kind: ParseErrorKind::Lex(lex),
                ..
            } => Error::Lex(lex),
            err => Error::Parse(err),
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}
