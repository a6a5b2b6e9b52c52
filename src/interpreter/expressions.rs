//! Expression evaluation: variables, arithmetic and comparisons.
//!
//! Both operands of every binary operator must be integers. Arithmetic is
//! checked, so overflow and division by zero are reported instead of wrapping
//! or panicking. Comparisons yield `1` or `0`.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::parser::ast::{ArithOp, AstNode, CmpOp, SourceLocation};

impl Interpreter {
    pub(crate) fn lookup_variable(&self, name: &str, location: SourceLocation) -> Result<Value, RuntimeError> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
                location,
            })
    }

    /// Require an integer, naming `context` in the error otherwise
    pub(crate) fn expect_int(value: &Value, context: &str, location: SourceLocation) -> Result<i32, RuntimeError> {
        value.as_int().ok_or_else(|| RuntimeError::TypeError {
            context: context.to_string(),
            expected: "integer",
            got: value.kind_name(),
            location,
        })
    }

    /// Evaluate both operands left to right and require integers
    fn evaluate_int_operands(
        &mut self,
        symbol: &str,
        left: &AstNode,
        right: &AstNode,
        location: SourceLocation,
    ) -> Result<(i32, i32), RuntimeError> {
        let left_val = self.evaluate(left)?;
        let right_val = self.evaluate(right)?;
        let context = format!("'{}' operator", symbol);
        let a = Self::expect_int(&left_val, &context, location)?;
        let b = Self::expect_int(&right_val, &context, location)?;
        Ok((a, b))
    }

    pub(crate) fn evaluate_arithmetic(
        &mut self,
        op: ArithOp,
        left: &AstNode,
        right: &AstNode,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let (a, b) = self.evaluate_int_operands(op.symbol(), left, right, location)?;

        let result = match op {
            ArithOp::Add => a.checked_add(b),
            ArithOp::Sub => a.checked_sub(b),
            ArithOp::Mul => a.checked_mul(b),
            ArithOp::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { location });
                }
                a.checked_div(b)
            }
        };

        result
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::IntegerOverflow {
                operation: format!("{} {} {}", a, op.symbol(), b),
                location,
            })
    }

    pub(crate) fn evaluate_comparison(
        &mut self,
        op: CmpOp,
        left: &AstNode,
        right: &AstNode,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let (a, b) = self.evaluate_int_operands(op.symbol(), left, right, location)?;

        let holds = match op {
            CmpOp::Eq => a == b,
            CmpOp::Ne => a != b,
            CmpOp::Lt => a < b,
            CmpOp::Gt => a > b,
            CmpOp::Le => a <= b,
            CmpOp::Ge => a >= b,
        };

        Ok(Value::Int(i32::from(holds)))
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::errors::RuntimeError;
    use crate::memory::value::Value;
    use crate::parser::parse::Parser;
    use crate::terminal::Terminal;

    fn eval(expr: &str) -> Result<Value, RuntimeError> {
        let source = format!("void main() {{ {}; }}", expr);
        let mut parser = Parser::new(&source).unwrap();
        let program = parser.parse_program().unwrap();
        Interpreter::with_terminal(program, Terminal::captured()).run()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), Value::Int(14));
        assert_eq!(eval("(2 + 3) * 4").unwrap(), Value::Int(20));
        assert_eq!(eval("10 - 4 - 3").unwrap(), Value::Int(3));
        assert_eq!(eval("7 / 2").unwrap(), Value::Int(3));
        assert_eq!(eval("0 - 7 / 2").unwrap(), Value::Int(-3));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval("1 == 1").unwrap(), Value::Int(1));
        assert_eq!(eval("1 != 1").unwrap(), Value::Int(0));
        assert_eq!(eval("1 < 2").unwrap(), Value::Int(1));
        assert_eq!(eval("1 > 2").unwrap(), Value::Int(0));
        assert_eq!(eval("2 <= 2").unwrap(), Value::Int(1));
        assert_eq!(eval("1 >= 2").unwrap(), Value::Int(0));
    }

    #[test]
    fn test_comparison_chain_compares_result() {
        // (3 < 2) < 1  ==>  0 < 1
        assert_eq!(eval("3 < 2 < 1").unwrap(), Value::Int(1));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(eval("5 / 0"), Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            eval("2147483647 + 1"),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            eval("(0 - 2147483647 - 1) / (0 - 1)"),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_mixed_kinds_are_type_errors() {
        assert!(matches!(
            eval(r#""a" + 1"#),
            Err(RuntimeError::TypeError { got: "text", .. })
        ));
        assert!(matches!(
            eval(r#"1 == "1""#),
            Err(RuntimeError::TypeError { got: "text", .. })
        ));
        assert!(matches!(
            eval(r#""a" == "a""#),
            Err(RuntimeError::TypeError { .. })
        ));
    }

    #[test]
    fn test_undefined_variable() {
        match eval("z") {
            Err(RuntimeError::UndefinedVariable { name, .. }) => assert_eq!(name, "z"),
            other => panic!("Expected undefined variable, got {:?}", other),
        }
    }
}
