// AST (Abstract Syntax Tree) definitions for the npavc language

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Arithmetic operators (`+ - * /`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

/// Comparison operators (`== != < > <= >=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
        }
    }
}

/// AST nodes representing statements and expressions.
///
/// Every node owns its children outright; the tree is built bottom-up by the
/// parser and only ever read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Statements
    Block {
        statements: Vec<AstNode>,
        location: SourceLocation,
    },
    VarDecl {
        name: String,
        init: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    Assignment {
        name: String,
        value: Box<AstNode>,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Box<AstNode>,
        location: SourceLocation,
    },
    Return {
        expr: Option<Box<AstNode>>,
        location: SourceLocation,
    },

    // Expressions
    IntLiteral(i32, SourceLocation),
    StringLiteral(String, SourceLocation),
    Variable(String, SourceLocation),
    Arithmetic {
        op: ArithOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    Comparison {
        op: CmpOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    FunctionCall {
        name: String,
        args: Vec<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            AstNode::Block { location, .. }
            | AstNode::VarDecl { location, .. }
            | AstNode::Assignment { location, .. }
            | AstNode::If { location, .. }
            | AstNode::While { location, .. }
            | AstNode::Return { location, .. }
            | AstNode::Arithmetic { location, .. }
            | AstNode::Comparison { location, .. }
            | AstNode::FunctionCall { location, .. } => *location,
            AstNode::IntLiteral(_, loc)
            | AstNode::StringLiteral(_, loc)
            | AstNode::Variable(_, loc) => *loc,
        }
    }
}

/// The `void main() { ... }` entry point
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MainFunction {
    pub body: Vec<AstNode>,
    pub location: SourceLocation,
}

/// Top-level program structure: exactly one main function
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub main: MainFunction,
}
