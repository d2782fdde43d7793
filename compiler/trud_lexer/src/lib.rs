//! Lexer for TrudWave using logos.
//!
//! [`tokenize`] returns a lazy [`TokenStream`]: tokens are produced one at a
//! time as the parser pulls them, whitespace never leaves the lexer, and
//! comments are kept. The stream is `Clone`, so a copy taken before
//! iterating restarts from the same position.

mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use trud_ir::{Span, Token};

pub use escape::string_value;
pub use lex_error::{LexError, LexErrorKind};

use raw_token::RawToken;

/// Lazy token sequence over a source string.
#[derive(Clone)]
pub struct TokenStream<'src> {
    source: &'src str,
    logos: logos::Lexer<'src, RawToken>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        TokenStream {
            source,
            logos: RawToken::lexer(source),
        }
    }

    /// The text being tokenized.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// A fresh stream over the same source, starting at the first token.
    #[must_use]
    pub fn restart(&self) -> Self {
        TokenStream::new(self.source)
    }
}

impl<'src> Iterator for TokenStream<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.logos.next()?;
            let span = Span::from_range(self.logos.span());
            let text = self.logos.slice();

            let result = match raw {
                Ok(RawToken::UnterminatedString) => Err(LexError::unterminated_string(span)),
                Ok(RawToken::MalformedNumber) => Err(LexError::malformed_number(span)),
                Ok(raw) => {
                    let kind = raw.kind();
                    if kind.is_trivia() {
                        continue;
                    }
                    Ok(Token::new(kind, text, span))
                }
                Err(()) => Err(LexError::unexpected_character(
                    text.chars().next().unwrap_or('\0'),
                    span.start,
                )),
            };
            return Some(result);
        }
    }
}

/// Tokenize `source` lazily.
pub fn tokenize(source: &str) -> TokenStream<'_> {
    TokenStream::new(source)
}
