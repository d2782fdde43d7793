//! Token types produced by the lexer.
//!
//! `TokenKind` is a closed set of coarse lexical classes. Operators and
//! keywords of the same class share one kind; the parser distinguishes them
//! by the token text.

use std::fmt;

use super::Span;

/// Lexical class of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `//` line comment, up to (not including) the newline.
    Comment,
    StringLiteral,
    /// `match`, `when`, `otherwise`.
    Keyword,
    /// `number`, `string`, `bool`.
    TypeName,
    BooleanLiteral,
    NumberLiteral,
    Identifier,
    /// `->`
    Arrow,
    /// `<=`, `>=`, `==`, `<`, `>`
    CompareOp,
    /// `&&`, `||`, `!`
    LogicOp,
    /// `+`, `-`, `*`, `/`
    ArithOp,
    /// `=`
    Assign,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    /// Matched by the lexer and dropped before the token stream is handed out.
    Whitespace,
}

impl TokenKind {
    /// The upper-case name used in diagnostics (`SEMICOLON`, `COMPARE_OP`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::TypeName => "TYPE_NAME",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::NumberLiteral => "NUMBER_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Arrow => "ARROW",
            TokenKind::CompareOp => "COMPARE_OP",
            TokenKind::LogicOp => "LOGIC_OP",
            TokenKind::ArithOp => "ARITH_OP",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Whitespace => "WHITESPACE",
        }
    }

    /// Whether tokens of this kind are dropped before reaching the parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token borrowing its text from the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Byte offset of the first character of the token.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// Check both the kind and the exact text, e.g. `COMPARE_OP "<"`.
    #[inline]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.text, self.span)
    }
}
