//! Tree-walking interpreter
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`Interpreter`](engine::Interpreter) and node dispatch
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! The interpreter walks the AST depth-first and produces a
//! [`Value`](crate::memory::value::Value) for every node. Variables live in a
//! single flat environment owned by the interpreter instance.
//!
//! # Built-in Functions
//!
//! `print` and `compile` are implemented directly on the interpreter in
//! `builtins`.

mod builtins;
pub mod engine;
pub mod errors;
mod expressions;
mod statements;
