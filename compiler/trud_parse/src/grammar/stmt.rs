//! Statement parsing.
//!
//! Dispatch on the first token: `COMMENT` is a comment, `<` starts a
//! function declaration, a type name starts a variable declaration, and
//! anything else is an expression statement. Every statement except a
//! comment ends in `;`.

use std::rc::Rc;

use trud_ir::{ExprKind, FunctionDecl, MatchExpr, Statement, StmtKind, TokenKind};

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if self.cursor.check(TokenKind::Comment) {
            let token = self.cursor.consume()?;
            return Ok(Statement::new(
                StmtKind::Comment {
                    value: token.text.to_string(),
                },
                token.span,
            ));
        }

        if self.cursor.check_text(TokenKind::CompareOp, "<") {
            return self.in_error_context(
                ErrorContext::FunctionDeclaration,
                Self::parse_function_declaration,
            );
        }

        if self.cursor.check(TokenKind::TypeName) {
            return self.in_error_context(
                ErrorContext::VariableDeclaration,
                Self::parse_variable_declaration,
            );
        }

        self.in_error_context(ErrorContext::ExpressionStatement, |p| {
            let expression = p.parse_expression()?;
            let end = p.cursor.expect(TokenKind::Semicolon)?.span;
            let span = expression.span.merge(end);
            Ok(Statement::new(StmtKind::ExpressionStatement { expression }, span))
        })
    }

    /// `number x = expr;`
    fn parse_variable_declaration(&mut self) -> Result<Statement, ParseError> {
        let var_type = self.cursor.expect(TokenKind::TypeName)?;
        let name = self.cursor.expect(TokenKind::Identifier)?;
        self.cursor.expect(TokenKind::Assign)?;
        let initializer = self.parse_expression()?;
        let end = self.cursor.expect(TokenKind::Semicolon)?.span;

        Ok(Statement::new(
            StmtKind::VariableDeclaration {
                var_type: var_type.text.to_string(),
                name: name.text.to_string(),
                initializer,
            },
            var_type.span.merge(end),
        ))
    }

    /// `<T1, ..., Tn> name(params) = expr;` or `<T1, ..., Tn> name = expr;`
    ///
    /// The last type is the return type. In the first (sugar) form the body
    /// becomes a single catch-all clause over `params`; in the second, a
    /// `match` body supplies the parameters and any other body becomes a
    /// zero-parameter catch-all.
    fn parse_function_declaration(&mut self) -> Result<Statement, ParseError> {
        let start = self.cursor.current_span();
        let mut types = self.in_error_context(ErrorContext::TypeList, Self::parse_type_list)?;
        let Some(return_type) = types.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::MissingReturnType,
                start.merge(self.cursor.previous_span()),
            ));
        };
        let param_types = types;

        let name = self.cursor.expect(TokenKind::Identifier)?;

        let body = if self.cursor.check(TokenKind::LParen) {
            let params = self.parse_param_list()?;
            self.cursor.expect(TokenKind::Assign)?;
            let expr = self.parse_expression()?;
            Rc::new(MatchExpr::catch_all(params, expr))
        } else {
            self.cursor.expect(TokenKind::Assign)?;
            let expr = self.parse_expression()?;
            match expr.kind {
                ExprKind::Match(m) => m,
                _ => Rc::new(MatchExpr::catch_all(Vec::new(), expr)),
            }
        };
        let end = self.cursor.expect(TokenKind::Semicolon)?.span;

        let params: Vec<String> = body.param_names().map(str::to_string).collect();
        if params.len() != param_types.len() {
            tracing::warn!(
                function = name.text,
                declared = param_types.len(),
                params = params.len(),
                "parameter count does not match declared parameter types"
            );
        }

        Ok(Statement::new(
            StmtKind::FunctionDeclaration(FunctionDecl {
                name: name.text.to_string(),
                param_types,
                return_type,
                params,
                body,
            }),
            start.merge(end),
        ))
    }

    /// `< T1, ..., Tn >`; entries are type names or identifiers. An empty
    /// list `< >` comes back empty for the caller to reject.
    fn parse_type_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.cursor.expect_text(TokenKind::CompareOp, "<")?;
        let mut types = Vec::new();
        if !self.cursor.check_text(TokenKind::CompareOp, ">") {
            loop {
                if self
                    .cursor
                    .check_any(&[TokenKind::TypeName, TokenKind::Identifier])
                {
                    types.push(self.cursor.consume()?.text.to_string());
                } else {
                    self.cursor.expect(TokenKind::TypeName)?;
                }
                if !self.cursor.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.cursor.expect_text(TokenKind::CompareOp, ">")?;
        Ok(types)
    }
}
