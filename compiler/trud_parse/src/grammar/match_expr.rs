//! `match` expressions.
//!
//! ```text
//! match (a, b) {
//!     when a < b -> a;
//!     when _ -> b;        // catch-all, same as otherwise
//!     otherwise -> 0;
//! }
//! ```
//!
//! Comments between clauses are skipped.

use std::rc::Rc;

use trud_ir::{Ident, MatchCase, MatchExpr, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_match(&mut self) -> Result<Rc<MatchExpr>, ParseError> {
        self.in_error_context(ErrorContext::MatchExpression, |p| {
            let start = p.cursor.expect(TokenKind::Keyword)?.span;

            let params = if p.cursor.check(TokenKind::LParen) {
                p.parse_param_list()?
            } else {
                let name = p.cursor.expect(TokenKind::Identifier)?;
                vec![Ident::new(name.text, name.span)]
            };

            p.cursor.expect(TokenKind::LBrace)?;
            let mut cases = Vec::new();
            while !p.cursor.check(TokenKind::RBrace) {
                if p.cursor.eat(TokenKind::Comment)? {
                    continue;
                }
                cases.push(p.in_error_context(ErrorContext::MatchClause, Self::parse_match_case)?);
            }
            let end = p.cursor.expect(TokenKind::RBrace)?.span;

            Ok(Rc::new(MatchExpr {
                params,
                cases,
                span: start.merge(end),
            }))
        })
    }

    /// `when cond -> body;`, `when _ -> body;`, or `otherwise -> body;`.
    fn parse_match_case(&mut self) -> Result<MatchCase, ParseError> {
        let start = self.cursor.current_span();
        let condition = if self.cursor.check_text(TokenKind::Keyword, "when") {
            self.cursor.consume()?;
            if self.cursor.check_text(TokenKind::Identifier, "_") {
                self.cursor.consume()?;
                None
            } else {
                Some(self.parse_expression()?)
            }
        } else if self.cursor.check_text(TokenKind::Keyword, "otherwise") {
            self.cursor.consume()?;
            None
        } else {
            return Err(match self.cursor.peek() {
                Some(&found) => ParseError::expected_clause(found),
                None => ParseError::unexpected_eof("'}'", start),
            });
        };

        self.cursor.expect(TokenKind::Arrow)?;
        let body = self.parse_expression()?;
        let end = self.cursor.expect(TokenKind::Semicolon)?.span;

        Ok(MatchCase {
            condition,
            body,
            span: start.merge(end),
        })
    }

    /// `( ident, ... )`, possibly empty.
    pub(crate) fn parse_param_list(&mut self) -> Result<Vec<Ident>, ParseError> {
        self.in_error_context(ErrorContext::ParameterList, |p| {
            p.cursor.expect(TokenKind::LParen)?;
            let mut params = Vec::new();
            if !p.cursor.check(TokenKind::RParen) {
                loop {
                    let name = p.cursor.expect(TokenKind::Identifier)?;
                    params.push(Ident::new(name.text, name.span));
                    if !p.cursor.eat(TokenKind::Comma)? {
                        break;
                    }
                }
            }
            p.cursor.expect(TokenKind::RParen)?;
            Ok(params)
        })
    }
}
