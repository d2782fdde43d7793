//! Token cursor for navigating the token stream.
//!
//! One token of lookahead over a lazy [`TokenStream`]. The next token is
//! pulled from the lexer only when the current one is consumed, so a lex
//! error surfaces as a [`ParseError`] at the moment the parser steps onto
//! the bad input.

use tracing::trace;
use trud_ir::{Span, Token, TokenKind};
use trud_lexer::TokenStream;

use crate::ParseError;

pub struct Cursor<'src> {
    tokens: TokenStream<'src>,
    current: Option<Token<'src>>,
    previous_span: Span,
    /// Offset one past the last byte of the source, used as the EOF span.
    end: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned on the first token.
    pub fn new(mut tokens: TokenStream<'src>) -> Result<Self, ParseError> {
        let end = u32::try_from(tokens.source().len()).unwrap_or(u32::MAX);
        let current = tokens.next().transpose().map_err(ParseError::from)?;
        Ok(Cursor {
            tokens,
            current,
            previous_span: Span::point(0),
            end,
        })
    }

    /// The current token, or `None` at the end of input.
    #[inline]
    pub fn peek(&self) -> Option<&Token<'src>> {
        self.current.as_ref()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Span of the current token; a point at the end of the source at EOF.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.map_or(Span::point(self.end), |t| t.span)
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous_span
    }

    /// Check if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.is_some_and(|t| t.kind == kind)
    }

    /// Check if the current token has any of the given kinds.
    #[inline]
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        self.current.is_some_and(|t| kinds.contains(&t.kind))
    }

    /// Check both kind and text, e.g. `COMPARE_OP "<"`.
    #[inline]
    pub fn check_text(&self, kind: TokenKind, text: &str) -> bool {
        self.current.is_some_and(|t| t.is(kind, text))
    }

    /// Consume the current token and pull the next one from the lexer.
    ///
    /// Fails at the end of input, or when the lexer rejects the next token.
    pub fn consume(&mut self) -> Result<Token<'src>, ParseError> {
        let Some(token) = self.current else {
            return Err(ParseError::unexpected_eof("a token", self.current_span()));
        };
        trace!(
            kind = %token.kind,
            text = token.text,
            span_start = token.span.start,
            span_end = token.span.end,
            "consume"
        );
        self.previous_span = token.span;
        self.current = self.tokens.next().transpose().map_err(ParseError::from)?;
        Ok(token)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.consume()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expect the current token to be of the given kind, consume and return it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            self.consume()
        } else {
            Err(self.make_expect_error(kind, None))
        }
    }

    /// Expect a token with exact text, e.g. the `>` closing a type list.
    pub fn expect_text(
        &mut self,
        kind: TokenKind,
        text: &'static str,
    ) -> Result<Token<'src>, ParseError> {
        if self.check_text(kind, text) {
            self.consume()
        } else {
            Err(self.make_expect_error(kind, Some(text)))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind, text: Option<&'static str>) -> ParseError {
        match self.current {
            Some(found) => ParseError::expected_token(kind, text, found),
            None => {
                let expected = match text {
                    Some(text) => format!("'{text}'"),
                    None => format!("token type {kind}"),
                };
                ParseError::unexpected_eof(expected, self.current_span())
            }
        }
    }
}
