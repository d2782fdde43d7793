//! Recursive descent parser for TrudWave.
//!
//! Pulls tokens lazily through a [`Cursor`] and builds a [`Program`].
//! Parsing stops at the first error; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use trud_ir::Program;
use trud_lexer::TokenStream;

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    /// Create a parser positioned on the first token of `tokens`.
    pub fn new(tokens: TokenStream<'src>) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(tokens)?,
        })
    }

    /// Parse statements until the input is exhausted.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            body.push(self.parse_statement()?);
        }
        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program { body })
    }

    /// Run `f`, tagging any error it returns with `context` unless a
    /// nested construct already tagged it.
    #[inline]
    pub(crate) fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.or_context(context))
    }
}

/// Parse source text into a program.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_tokens(trud_lexer::tokenize(source))
}

/// Parse an existing token stream.
pub fn parse_tokens(tokens: TokenStream<'_>) -> Result<Program, ParseError> {
    Parser::new(tokens)?.parse_program()
}

#[cfg(test)]
mod tests;
