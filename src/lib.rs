//! # Introduction
//!
//! `npavc` is the front end of a small C-like teaching language: a lexer, a
//! recursive-descent parser, a tree-walking interpreter and a C++ source
//! generator reachable through the `compile` built-in.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Interpreter
//!                                     └─ compile("f.npavc") → Lexer → Parser → C++ generator → f.cpp
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST.
//! 2. [`interpreter`]: walks the AST and executes `main`.
//! 3. [`memory`]: tagged [`memory::value::Value`]s in a flat
//!    [`memory::Environment`].
//! 4. [`codegen`]: AST to C++ text and the file-level compile pipeline.
//! 5. [`terminal`]: where `print` output goes.
//!
//! ## Language
//!
//! ```text
//! void main() {
//!     int x = 0;
//!     while (x < 3) { print(x); x = x + 1; }
//! }
//! ```
//!
//! Types: integers and text. Control flow: `if/else`, `while`, blocks,
//! `return` (which does not exit early). Built-ins: `print`, `compile`.

pub mod codegen;
pub mod diagnostic;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod terminal;

use codegen::CompileError;
use interpreter::engine::Interpreter;
use interpreter::errors::RuntimeError;
use memory::value::Value;
use parser::parse::{ParseError, Parser};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use terminal::Terminal;
use tracing::debug;

/// Top-level error for a whole pipeline run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not open file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File '{}' is empty", .path.display())]
    EmptySource { path: PathBuf },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Lex, parse and run `source`, sending output to `terminal`.
///
/// Returns the interpreter so callers can inspect its output, environment
/// and diagnostics. Lexer warnings come first in
/// [`Interpreter::diagnostics`], followed by those raised while running.
pub fn run_source(source: &str, terminal: Terminal) -> Result<(Interpreter, Value), Error> {
    let mut parser = Parser::new(source)?;
    let program = parser.parse_program()?;

    let mut interpreter = Interpreter::with_terminal(program, terminal);
    interpreter.diagnostics.extend_from_slice(parser.diagnostics());
    let value = interpreter.run()?;
    for (name, value) in interpreter.environment().sorted() {
        debug!("{} = {:?}", name, value);
    }
    Ok((interpreter, value))
}

/// Read the program at `path` and interpret it
pub fn run_file(path: &Path, terminal: Terminal) -> Result<(Interpreter, Value), Error> {
    let source = read_source(path)?;
    run_source(&source, terminal)
}

/// Read a source file, rejecting empty input
pub fn read_source(path: &Path) -> Result<String, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if source.is_empty() {
        return Err(Error::EmptySource {
            path: path.to_path_buf(),
        });
    }

    Ok(source)
}
