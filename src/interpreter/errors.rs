//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to parse errors).
//!
//! All runtime errors are fatal: they abort the current run and propagate to
//! the caller, including failures inside the nested pipeline of `compile`.

use crate::codegen::CompileError;
use crate::parser::ast::SourceLocation;
use std::io;

/// Runtime errors that can occur during execution
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Undefined variable reference
    #[error("Undefined variable '{name}' at line {}", .location.line)]
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    /// An operand or condition of the wrong kind
    #[error("Type error at line {}: {context} expects {expected}, got {got}", .location.line)]
    TypeError {
        context: String,
        expected: &'static str,
        got: &'static str,
        location: SourceLocation,
    },

    /// Division by zero
    #[error("Division by zero at line {}", .location.line)]
    DivisionByZero { location: SourceLocation },

    /// Integer overflow in arithmetic operation
    #[error("Integer overflow in operation: {operation} at line {}", .location.line)]
    IntegerOverflow {
        operation: String,
        location: SourceLocation,
    },

    /// Call to a name that is not a built-in
    #[error("Unknown function '{name}' at line {}", .location.line)]
    UnknownFunction {
        name: String,
        location: SourceLocation,
    },

    /// Built-in called with the wrong number of arguments
    #[error(
        "{function}() function expects exactly {expected} argument{}, got {got} at line {}",
        plural(.expected),
        .location.line
    )]
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        got: usize,
        location: SourceLocation,
    },

    /// The `compile` built-in failed
    #[error("{source} (compile() at line {})", .location.line)]
    Compile {
        #[source]
        source: CompileError,
        location: SourceLocation,
    },

    /// Writing program output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

impl RuntimeError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            RuntimeError::UndefinedVariable { location, .. }
            | RuntimeError::TypeError { location, .. }
            | RuntimeError::DivisionByZero { location }
            | RuntimeError::IntegerOverflow { location, .. }
            | RuntimeError::UnknownFunction { location, .. }
            | RuntimeError::ArgumentCountMismatch { location, .. }
            | RuntimeError::Compile { location, .. } => Some(*location),
            RuntimeError::Output(_) => None,
        }
    }
}
