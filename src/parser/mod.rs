//! npavc source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: The [`Parser`](parse::Parser) and its error type
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! A program is a single `void main() { ... }` containing `int` declarations,
//! assignments, `if`/`else`, `while`, blocks, `return`, and expression
//! statements. Expressions are integer and string literals, variables, calls,
//! `+ - * /` and the six comparisons.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per grammar rule, with
//! one loop per binary precedence level.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
