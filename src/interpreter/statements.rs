//! Statement execution
//!
//! Adds `impl Interpreter` methods for declarations, assignments, `if`,
//! `while`, blocks and `return`. Every statement produces a value; a sequence
//! yields the value of its last statement.
//!
//! `return` does not unwind. It evaluates its operand and execution carries on
//! with the next sibling statement, so its value only survives when it happens
//! to be the last statement evaluated.

use crate::diagnostic::Diagnostic;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::parser::ast::{AstNode, SourceLocation};
use tracing::warn;

impl Interpreter {
    /// Evaluate statements in order; the result is the last value, or 0 if empty
    pub(crate) fn execute_sequence(&mut self, statements: &[AstNode]) -> Result<Value, RuntimeError> {
        let mut result = Value::Int(0);
        for stmt in statements {
            result = self.evaluate(stmt)?;
        }
        Ok(result)
    }

    pub(crate) fn execute_var_decl(
        &mut self,
        name: &str,
        init: Option<&AstNode>,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let value = match init {
            Some(expr) => self.evaluate(expr)?,
            None => {
                let diagnostic = Diagnostic::new(
                    format!(
                        "variable '{}' declared without initialization (defaulting to 0)",
                        name
                    ),
                    location,
                );
                warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
                Value::Int(0)
            }
        };

        self.env.set(name, value.clone());
        Ok(value)
    }

    /// Assigning to a name that was never declared silently creates it
    pub(crate) fn execute_assignment(&mut self, name: &str, expr: &AstNode) -> Result<Value, RuntimeError> {
        let value = self.evaluate(expr)?;
        self.env.set(name, value.clone());
        Ok(value)
    }

    pub(crate) fn execute_if(
        &mut self,
        condition: &AstNode,
        then_branch: &AstNode,
        else_branch: Option<&AstNode>,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let cond_val = self.evaluate(condition)?;
        let cond = Self::expect_int(&cond_val, "if condition", location)?;

        if cond != 0 {
            self.evaluate(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.evaluate(else_branch)
        } else {
            Ok(Value::Int(0))
        }
    }

    /// The condition is re-evaluated before every iteration. The loop's value
    /// is the last body value, or 0 if the body never ran.
    pub(crate) fn execute_while(
        &mut self,
        condition: &AstNode,
        body: &AstNode,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let mut result = Value::Int(0);

        loop {
            let cond_val = self.evaluate(condition)?;
            if Self::expect_int(&cond_val, "while condition", location)? == 0 {
                break;
            }
            result = self.evaluate(body)?;
        }

        Ok(result)
    }

    pub(crate) fn execute_return(&mut self, expr: Option<&AstNode>) -> Result<Value, RuntimeError> {
        match expr {
            Some(expr) => self.evaluate(expr),
            None => Ok(Value::Int(0)),
        }
    }
}
