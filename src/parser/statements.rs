//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= var_decl | assignment | if_stmt | while_stmt
//!             | block | return_stmt | expr_stmt
//! var_decl   ::= 'int' IDENT ['=' expression] ';'
//! assignment ::= IDENT '=' expression ';'
//! if_stmt    ::= 'if' '(' expression ')' statement ['else' statement]
//! while_stmt ::= 'while' '(' expression ')' statement
//! block      ::= '{' statement* '}'
//! return_stmt::= 'return' [expression] ';'
//! expr_stmt  ::= expression ';'
//! ```
//!
//! An expression statement is stored as the bare expression node.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse statements up to (not including) the closing `}` or end of input
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();

        if self.match_token(TokenKind::Int) {
            return self.parse_variable_declaration(loc);
        }

        if self.check(TokenKind::Ident) {
            return self.parse_assignment_or_expression(loc);
        }

        if self.match_token(TokenKind::If) {
            return self.parse_if_statement(loc);
        }

        if self.match_token(TokenKind::While) {
            return self.parse_while_statement(loc);
        }

        if self.match_token(TokenKind::LBrace) {
            let statements = self.parse_block_statements()?;
            self.expect(TokenKind::RBrace)?;
            return Ok(AstNode::Block {
                statements,
                location: loc,
            });
        }

        if self.match_token(TokenKind::Return) {
            return self.parse_return_statement(loc);
        }

        self.parse_expression_statement()
    }

    /// `int name [= expr];` (the `int` is already consumed)
    fn parse_variable_declaration(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        let name = self.expect_identifier()?;

        let init = if self.match_token(TokenKind::Eq) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        self.expect(TokenKind::Semicolon)?;
        Ok(AstNode::VarDecl {
            name,
            init,
            location: loc,
        })
    }

    /// One token of lookahead after the identifier decides between
    /// `name = expr;` and a plain expression statement. For the latter the
    /// identifier is pushed back and the whole statement reparsed.
    fn parse_assignment_or_expression(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        let name = self.expect_identifier()?;

        if self.match_token(TokenKind::Eq) {
            let value = Box::new(self.parse_expression()?);
            self.expect(TokenKind::Semicolon)?;
            return Ok(AstNode::Assignment {
                name,
                value,
                location: loc,
            });
        }

        self.position -= 1;
        self.parse_expression_statement()
    }

    fn parse_expression_statement(&mut self) -> Result<AstNode, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(expr)
    }

    /// `if (cond) stmt [else stmt]`; `else` binds to the nearest `if`
    fn parse_if_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect(TokenKind::LParen)?;
        let condition = Box::new(self.parse_expression()?);
        self.expect(TokenKind::RParen)?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(AstNode::If {
            condition,
            then_branch,
            else_branch,
            location: loc,
        })
    }

    fn parse_while_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        self.expect(TokenKind::LParen)?;
        let condition = Box::new(self.parse_expression()?);
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::While {
            condition,
            body,
            location: loc,
        })
    }

    fn parse_return_statement(&mut self, loc: SourceLocation) -> Result<AstNode, ParseError> {
        let expr = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };

        self.expect(TokenKind::Semicolon)?;
        Ok(AstNode::Return {
            expr,
            location: loc,
        })
    }
}
