//! Expression parsing.
//!
//! Precedence climbing, lowest to highest:
//! `||`, `&&`, `==`, `< > <= >=`, `+ -`, `* /`, unary `! -`, call, primary.
//! All binary levels are left-associative.

use trud_ir::{BinaryOp, Expr, ExprKind, TokenKind};
use trud_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input grows the
    /// stack instead of overflowing it.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary_or())
    }

    /// `||`
    fn parse_binary_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_binary_and()?;
        while let Some(op) = self.match_or_op() {
            self.cursor.consume()?;
            let right = self.parse_binary_and()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `&&`
    fn parse_binary_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while let Some(op) = self.match_and_op() {
            self.cursor.consume()?;
            let right = self.parse_equality()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `==`
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some(op) = self.match_equality_op() {
            self.cursor.consume()?;
            let right = self.parse_comparison()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `<` `>` `<=` `>=`
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            self.cursor.consume()?;
            let right = self.parse_additive()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `+` `-`
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.cursor.consume()?;
            let right = self.parse_multiplicative()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `*` `/`
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.consume()?;
            let right = self.parse_unary()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `!x`, `-x`, right-recursive so `!!x` and `--x` nest.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_call();
        };
        let start = self.cursor.consume()?.span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `callee(args)`, chainable: `f(1)(2)`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.cursor.check(TokenKind::LParen) {
            let args = self.in_error_context(ErrorContext::CallArguments, Self::parse_call_args)?;
            let span = expr.span.merge(self.cursor.previous_span());
            expr = Expr::new(
                ExprKind::Call {
                    callee: Box::new(expr),
                    args,
                },
                span,
            );
        }
        Ok(expr)
    }

    /// `( expr, ... )` after a callee; the list may be empty.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.cursor.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(args)
    }

    /// Literals, identifiers, `match`, and parenthesized forms.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(&token) = self.cursor.peek() else {
            return Err(ParseError::unexpected_eof(
                "an expression",
                self.cursor.current_span(),
            ));
        };

        let kind = match token.kind {
            TokenKind::Keyword if token.text == "match" => {
                let m = self.parse_match()?;
                let span = m.span;
                return Ok(Expr::new(ExprKind::Match(m), span));
            }
            TokenKind::LParen => return self.parse_parenthesized(),
            TokenKind::NumberLiteral => {
                let value: f64 = token.text.parse().unwrap_or(f64::INFINITY);
                if !value.is_finite() {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidNumber {
                            raw: token.text.to_string(),
                        },
                        token.span,
                    ));
                }
                ExprKind::NumericLiteral {
                    value,
                    raw: token.text.to_string(),
                }
            }
            TokenKind::StringLiteral => ExprKind::StringLiteral {
                value: trud_lexer::string_value(token.text),
                raw: token.text.to_string(),
            },
            TokenKind::BooleanLiteral => ExprKind::BooleanLiteral {
                value: token.text == "true",
                raw: token.text.to_string(),
            },
            TokenKind::Identifier => ExprKind::Identifier {
                name: token.text.to_string(),
            },
            _ => return Err(ParseError::unexpected_token(token)),
        };
        self.cursor.consume()?;
        Ok(Expr::new(kind, token.span))
    }

    /// `(e)` is grouping; `(e1, e2, ...)` with two or more elements is a tuple.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::Parenthesized, |p| {
            let start = p.cursor.expect(TokenKind::LParen)?.span;
            let first = p.parse_expression()?;
            if !p.cursor.eat(TokenKind::Comma)? {
                p.cursor.expect(TokenKind::RParen)?;
                return Ok(first);
            }

            let mut elements = vec![first];
            loop {
                elements.push(p.parse_expression()?);
                if !p.cursor.eat(TokenKind::Comma)? {
                    break;
                }
            }
            let end = p.cursor.expect(TokenKind::RParen)?.span;
            Ok(Expr::new(
                ExprKind::TupleLiteral { elements },
                start.merge(end),
            ))
        })
    }
}
