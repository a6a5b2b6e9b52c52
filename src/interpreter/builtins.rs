//! Built-in function implementations
//!
//! There are no user-defined functions; every call must name a built-in.
//!
//! # Supported Built-ins
//!
//! - `print(x)`: writes the raw integer or text to the terminal with no
//!   separator and returns `x`
//! - `compile(path)`: runs a fresh lex/parse over the file at `path`, writes
//!   the generated C++ next to it and prints a confirmation line; returns `0`

use crate::codegen;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::parser::ast::{AstNode, SourceLocation};
use std::path::Path;

impl Interpreter {
    pub(crate) fn execute_function_call(
        &mut self,
        name: &str,
        args: &[AstNode],
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        match name {
            "print" => self.builtin_print(args, location),
            "compile" => self.builtin_compile(args, location),
            _ => Err(RuntimeError::UnknownFunction {
                name: name.to_string(),
                location,
            }),
        }
    }

    fn single_argument<'a>(
        function: &str,
        args: &'a [AstNode],
        location: SourceLocation,
    ) -> Result<&'a AstNode, RuntimeError> {
        match args {
            [arg] => Ok(arg),
            _ => Err(RuntimeError::ArgumentCountMismatch {
                function: function.to_string(),
                expected: 1,
                got: args.len(),
                location,
            }),
        }
    }

    fn builtin_print(&mut self, args: &[AstNode], location: SourceLocation) -> Result<Value, RuntimeError> {
        let arg = Self::single_argument("print", args, location)?;
        let value = self.evaluate(arg)?;
        self.terminal.print(&value.to_string())?;
        Ok(value)
    }

    /// The nested pipeline shares nothing with this interpreter; any failure in
    /// it aborts the current run.
    fn builtin_compile(&mut self, args: &[AstNode], location: SourceLocation) -> Result<Value, RuntimeError> {
        let arg = Self::single_argument("compile", args, location)?;
        let value = self.evaluate(arg)?;
        let input = value.as_text().ok_or_else(|| RuntimeError::TypeError {
            context: "compile() argument".to_string(),
            expected: "text",
            got: value.kind_name(),
            location,
        })?;

        let input = Path::new(input);
        let output = codegen::compile_file(input, None)
            .map_err(|source| RuntimeError::Compile { source, location })?;

        self.terminal.print(&codegen::confirmation(input, &output))?;
        Ok(Value::Int(0))
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::errors::RuntimeError;
    use crate::memory::value::Value;
    use crate::parser::parse::Parser;
    use crate::terminal::Terminal;

    fn run(source: &str) -> (Interpreter, Result<Value, RuntimeError>) {
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();
        let mut interpreter = Interpreter::with_terminal(program, Terminal::captured());
        let result = interpreter.run();
        (interpreter, result)
    }

    #[test]
    fn test_print_returns_its_argument() {
        let (interpreter, result) = run(r#"void main() { print("hi\n"); }"#);

        assert_eq!(result.unwrap(), Value::Text("hi\n".to_string()));
        assert_eq!(interpreter.terminal().output(), "hi\n");
    }

    #[test]
    fn test_print_arity() {
        let (interpreter, result) = run("void main() { print(1, 2); }");

        match result {
            Err(RuntimeError::ArgumentCountMismatch {
                function, got, ..
            }) => {
                assert_eq!(function, "print");
                assert_eq!(got, 2);
            }
            other => panic!("Expected arity error, got {:?}", other),
        }
        assert_eq!(interpreter.terminal().output(), "");

        let (_, result) = run("void main() { print(); }");
        assert!(matches!(
            result,
            Err(RuntimeError::ArgumentCountMismatch { got: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_function() {
        let (_, result) = run("void main() { printf(1); }");

        assert!(matches!(result, Err(RuntimeError::UnknownFunction { ref name, .. }) if name == "printf"));
    }

    #[test]
    fn test_compile_requires_text() {
        let (_, result) = run("void main() { compile(42); }");

        assert!(matches!(
            result,
            Err(RuntimeError::TypeError { expected: "text", got: "integer", .. })
        ));
    }

    #[test]
    fn test_compile_missing_file_is_fatal() {
        let (interpreter, result) =
            run(r#"void main() { compile("/definitely/not/here.npavc"); print(1); }"#);

        assert!(matches!(result, Err(RuntimeError::Compile { .. })));
        assert_eq!(interpreter.terminal().output(), "");
    }
}
