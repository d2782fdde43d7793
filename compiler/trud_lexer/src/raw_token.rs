//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to `TokenKind`. Keywords, type names, and booleans are
//! `#[token]` patterns, so they win over the identifier regex on an exact
//! match while longer words (`matches`, `numbers`) stay identifiers.

use logos::Logos;
use trud_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    Comment,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    /// A string that reaches a newline or the end of input before its
    /// closing quote.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    #[token("match")]
    #[token("when")]
    #[token("otherwise")]
    Keyword,

    #[token("number")]
    #[token("string")]
    #[token("bool")]
    TypeName,

    #[token("true")]
    #[token("false")]
    Boolean,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// Digits running straight into identifier characters (`12abc`).
    #[regex(r"[0-9]+(\.[0-9]+)?[A-Za-z_][A-Za-z0-9_]*")]
    MalformedNumber,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[token("->")]
    Arrow,

    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("<")]
    #[token(">")]
    Compare,

    #[token("&&")]
    #[token("||")]
    #[token("!")]
    Logic,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Arith,

    #[token("=")]
    Assign,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    #[regex(r"\s+")]
    Whitespace,
}

impl RawToken {
    /// Map to the public token kind.
    ///
    /// The error-only patterns map to the kind they failed to be; the stream
    /// reports them as errors before this is consulted.
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Comment => TokenKind::Comment,
            RawToken::String | RawToken::UnterminatedString => TokenKind::StringLiteral,
            RawToken::Keyword => TokenKind::Keyword,
            RawToken::TypeName => TokenKind::TypeName,
            RawToken::Boolean => TokenKind::BooleanLiteral,
            RawToken::Number | RawToken::MalformedNumber => TokenKind::NumberLiteral,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Compare => TokenKind::CompareOp,
            RawToken::Logic => TokenKind::LogicOp,
            RawToken::Arith => TokenKind::ArithOp,
            RawToken::Assign => TokenKind::Assign,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Whitespace => TokenKind::Whitespace,
        }
    }
}
