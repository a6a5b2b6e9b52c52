//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and the `void main()` wrapper
//! - `statements`: Parsing statements (declarations, if, while, blocks, ...)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! Parser methods are split across multiple files using `impl Parser` blocks.
//! There is no error recovery: the first syntax error aborts parsing.

use crate::diagnostic::Diagnostic;
use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use std::fmt;
use tracing::debug;

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The program does not start with `void`
    MissingEntryPoint,
    /// A specific token was required but another was found
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    /// No expression can start with the found token
    ExpectedExpression { found: TokenKind },
    /// A number literal that does not fit in a 32-bit integer
    InvalidNumber(String),
    /// Fatal lexer failure surfaced through the parser
    Lex(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingEntryPoint => write!(
                f,
                "couldn't find main function. Make sure to define it as void main() {{"
            ),
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "Expected {}, found {}", expected, found)
            }
            ParseErrorKind::ExpectedExpression { found } => write!(
                f,
                "Expected number, string, identifier, or '(', found {}",
                found
            ),
            ParseErrorKind::InvalidNumber(text) => {
                write!(f, "Invalid integer literal: {}", text)
            }
            ParseErrorKind::Lex(message) => write!(f, "{}", message),
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error at {location}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            kind: ParseErrorKind::Lex(err.message),
            location: err.location,
        }
    }
}

/// Recursive descent parser for the npavc language
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Tokenize `source` and prepare to parse it.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        debug!("lexed {} tokens", tokens.len());

        let mut parser = Self::from_tokens(tokens);
        parser.diagnostics = lexer.diagnostics().to_vec();
        Ok(parser)
    }

    /// Parse an already tokenized input. A missing trailing EOF is supplied.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, "", location));
        }
        Self {
            tokens,
            position: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse `void main() { statement* }`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        if !self.check(TokenKind::Void) {
            return Err(ParseError {
                kind: ParseErrorKind::MissingEntryPoint,
                location: self.current_location(),
            });
        }

        let location = self.current_location();
        self.expect(TokenKind::Void)?;
        self.expect(TokenKind::Main)?;
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_block_statements()?;
        self.expect(TokenKind::RBrace)?;

        debug!("parsed main with {} statements", body.len());
        Ok(Program {
            main: MainFunction { body, location },
        })
    }

    /// Warnings the lexer raised while tokenizing the source
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        // from_tokens guarantees a trailing Eof, and advance never moves past it
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Consume a token of the given kind or fail naming what was found
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    expected: kind,
                    found: self.peek().kind,
                },
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Ident)?.lexeme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_main() {
        let mut parser = Parser::new("void main() { }").unwrap();
        let program = parser.parse_program().unwrap();

        assert!(program.main.body.is_empty());
        assert_eq!(program.main.location, SourceLocation::new(1, 1));
    }

    #[test]
    fn test_missing_entry_point() {
        let mut parser = Parser::new("int main() { }").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::MissingEntryPoint);
        assert!(err.to_string().contains("couldn't find main function"));
    }

    #[test]
    fn test_wrong_token_reports_expected_and_found() {
        let mut parser = Parser::new("void main( { }").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::RParen,
                found: TokenKind::LBrace,
            }
        );
        assert_eq!(err.location, SourceLocation::new(1, 12));
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 12: Expected ')', found '{'"
        );
    }

    #[test]
    fn test_missing_closing_brace() {
        let mut parser = Parser::new("void main() { int x = 1;").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::RBrace,
                found: TokenKind::Eof,
            }
        );
    }

    #[test]
    fn test_lex_error_surfaces_as_parse_error() {
        let err = Parser::new("void main() { print(\"open); }").err().unwrap();

        assert!(matches!(err.kind, ParseErrorKind::Lex(ref m) if m == "Unterminated string literal"));
    }

    #[test]
    fn test_lexer_diagnostics_are_kept() {
        let parser = Parser::new("void main() { # }").unwrap();

        assert_eq!(parser.diagnostics().len(), 1);
        assert_eq!(parser.diagnostics()[0].message, "Unknown character '#'");
        assert_eq!(parser.diagnostics()[0].location, SourceLocation::new(1, 15));
    }

    #[test]
    fn test_from_tokens_appends_eof() {
        let tokens = vec![Token::new(TokenKind::Void, "void", SourceLocation::new(1, 1))];
        let mut parser = Parser::from_tokens(tokens);
        let err = parser.parse_program().unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Main,
                found: TokenKind::Eof,
            }
        );
    }
}
