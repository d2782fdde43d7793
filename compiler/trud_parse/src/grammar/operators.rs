//! Operator Matching Helpers
//!
//! Operators share coarse token kinds (`ARITH_OP`, `COMPARE_OP`, ...); these
//! helpers look at the text to pick the operator each precedence level owns.

use trud_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    fn current_op(&self, kind: TokenKind) -> Option<&str> {
        self.cursor
            .peek()
            .filter(|t| t.kind == kind)
            .map(|t| t.text)
    }

    pub(crate) fn match_or_op(&self) -> Option<BinaryOp> {
        match self.current_op(TokenKind::LogicOp)? {
            "||" => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_and_op(&self) -> Option<BinaryOp> {
        match self.current_op(TokenKind::LogicOp)? {
            "&&" => Some(BinaryOp::And),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_op(TokenKind::CompareOp)? {
            "==" => Some(BinaryOp::Eq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_op(TokenKind::CompareOp)? {
            "<" => Some(BinaryOp::Lt),
            "<=" => Some(BinaryOp::LtEq),
            ">" => Some(BinaryOp::Gt),
            ">=" => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_op(TokenKind::ArithOp)? {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_op(TokenKind::ArithOp)? {
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        let token = self.cursor.peek()?;
        match (token.kind, token.text) {
            (TokenKind::LogicOp, "!") => Some(UnaryOp::Not),
            (TokenKind::ArithOp, "-") => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
