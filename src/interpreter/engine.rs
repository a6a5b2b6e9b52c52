// Execution engine for the npavc interpreter

use crate::diagnostic::Diagnostic;
use crate::interpreter::errors::RuntimeError;
use crate::memory::{value::Value, Environment};
use crate::parser::ast::*;
use crate::terminal::Terminal;
use tracing::debug;

/// The tree-walking interpreter for one parsed program.
///
/// Every interpreter owns its own [`Environment`] and [`Terminal`], so two
/// interpreters never share state.
pub struct Interpreter {
    /// Parsed program
    program: Program,

    /// Flat variable storage
    pub(crate) env: Environment,

    /// Destination for `print` and `compile` output
    pub(crate) terminal: Terminal,

    /// Non-fatal warnings raised while running
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Interpreter {
    /// Create an interpreter with an explicit output sink
    pub fn with_terminal(program: Program, terminal: Terminal) -> Self {
        Interpreter {
            program,
            env: Environment::new(),
            terminal,
            diagnostics: Vec::new(),
        }
    }

    /// Run the program from start to finish.
    ///
    /// Returns the value of the last statement evaluated in `main`
    /// (integer 0 for an empty body).
    pub fn run(&mut self) -> Result<Value, RuntimeError> {
        let program = std::mem::take(&mut self.program);

        let result = self.execute_sequence(&program.main.body);
        self.program = program;

        let value = result?;
        debug!("main finished with value {:?}", value);
        Ok(value)
    }

    /// Evaluate a single node, statement or expression
    pub(crate) fn evaluate(&mut self, node: &AstNode) -> Result<Value, RuntimeError> {
        match node {
            AstNode::Block { statements, .. } => self.execute_sequence(statements),
            AstNode::VarDecl {
                name,
                init,
                location,
            } => self.execute_var_decl(name, init.as_deref(), *location),
            AstNode::Assignment { name, value, .. } => self.execute_assignment(name, value),
            AstNode::If {
                condition,
                then_branch,
                else_branch,
                location,
            } => self.execute_if(condition, then_branch, else_branch.as_deref(), *location),
            AstNode::While {
                condition,
                body,
                location,
            } => self.execute_while(condition, body, *location),
            AstNode::Return { expr, .. } => self.execute_return(expr.as_deref()),

            AstNode::IntLiteral(n, _) => Ok(Value::Int(*n)),
            AstNode::StringLiteral(s, _) => Ok(Value::Text(s.clone())),
            AstNode::Variable(name, location) => self.lookup_variable(name, *location),
            AstNode::Arithmetic {
                op,
                left,
                right,
                location,
            } => self.evaluate_arithmetic(*op, left, right, *location),
            AstNode::Comparison {
                op,
                left,
                right,
                location,
            } => self.evaluate_comparison(*op, left, right, *location),
            AstNode::FunctionCall {
                name,
                args,
                location,
            } => self.execute_function_call(name, args, *location),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
