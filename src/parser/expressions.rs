//! Expression parsing implementation
//!
//! Precedence, lowest to highest:
//!
//! ```text
//! comparison     ::= additive (('==' | '!=' | '<' | '>' | '<=' | '>=') additive)*
//! additive       ::= multiplicative (('+' | '-') multiplicative)*
//! multiplicative ::= primary (('*' | '/') primary)*
//! primary        ::= NUMBER | STRING | '(' expression ')'
//!                  | IDENT '(' [expression (',' expression)*] ')'
//!                  | IDENT
//! ```
//!
//! Every binary level is left-associative, so `a < b < c` is `(a < b) < c`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => CmpOp::Eq,
                TokenKind::NotEq => CmpOp::Ne,
                TokenKind::Lt => CmpOp::Lt,
                TokenKind::Gt => CmpOp::Gt,
                TokenKind::Le => CmpOp::Le,
                TokenKind::Ge => CmpOp::Ge,
                _ => break,
            };
            let loc = self.advance().location;
            let right = self.parse_additive()?;
            left = AstNode::Comparison {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => ArithOp::Add,
                TokenKind::Minus => ArithOp::Sub,
                _ => break,
            };
            let loc = self.advance().location;
            let right = self.parse_multiplicative()?;
            left = AstNode::Arithmetic {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_primary()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Star => ArithOp::Mul,
                TokenKind::Slash => ArithOp::Div,
                _ => break,
            };
            let loc = self.advance().location;
            let right = self.parse_primary()?;
            left = AstNode::Arithmetic {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<AstNode, ParseError> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                let value = token.lexeme.parse::<i32>().map_err(|_| ParseError {
                    kind: ParseErrorKind::InvalidNumber(token.lexeme.clone()),
                    location: token.location,
                })?;
                Ok(AstNode::IntLiteral(value, token.location))
            }
            TokenKind::String => {
                self.advance();
                Ok(AstNode::StringLiteral(token.lexeme, token.location))
            }
            TokenKind::Ident => {
                self.advance();
                if self.match_token(TokenKind::LParen) {
                    let args = self.parse_call_arguments()?;
                    Ok(AstNode::FunctionCall {
                        name: token.lexeme,
                        args,
                        location: token.location,
                    })
                } else {
                    Ok(AstNode::Variable(token.lexeme, token.location))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            found => Err(ParseError {
                kind: ParseErrorKind::ExpectedExpression { found },
                location: token.location,
            }),
        }
    }

    /// Comma-separated arguments after `(`, consuming the closing `)`
    fn parse_call_arguments(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        Ok(args)
    }
}
