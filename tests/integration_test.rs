// Integration tests for the npavc pipeline

use npavc::interpreter::errors::RuntimeError;
use npavc::memory::value::Value;
use npavc::terminal::Terminal;
use npavc::{run_source, Error};

fn output_of(source: &str) -> String {
    let (interpreter, _) = run_source(source, Terminal::captured()).expect("Execution failed");
    interpreter.terminal().output().to_string()
}

#[test]
fn test_simple_arithmetic() {
    let source = r#"
        void main() {
            int x = 3;
            int y = x + 4;
            print(y);
        }
    "#;

    assert_eq!(output_of(source), "7");
}

#[test]
fn test_while_loop() {
    let source = r#"
        void main() {
            int i = 0;
            while (i < 3) {
                print(i);
                i = i + 1;
            }
        }
    "#;

    assert_eq!(output_of(source), "012");
}

#[test]
fn test_if_else_with_text() {
    let source = r#"
        void main() {
            int x = 10;
            if (x > 5) { print("yes"); } else { print("no"); }
        }
    "#;

    assert_eq!(output_of(source), "yes");
}

#[test]
fn test_comments_and_escapes() {
    let source = "void main() {\n    // line comment\n    /* block\n       comment */\n    print(\"a\\tb\\n\");\n}\n";

    assert_eq!(output_of(source), "a\tb\n");
}

#[test]
fn test_assignment_without_declaration() {
    let (interpreter, _) =
        run_source("void main() { y = 5; print(y); }", Terminal::captured()).expect("Execution failed");

    assert_eq!(interpreter.terminal().output(), "5");
    assert_eq!(interpreter.environment().get("y"), Some(&Value::Int(5)));
}

#[test]
fn test_uninitialized_declaration_warns() {
    let (interpreter, _) =
        run_source("void main() { int x; print(x); }", Terminal::captured()).expect("Execution failed");

    assert_eq!(interpreter.terminal().output(), "0");
    assert_eq!(interpreter.diagnostics().len(), 1);
    assert!(interpreter.diagnostics()[0].message.contains("'x'"));
}

#[test]
fn test_return_does_not_stop_execution() {
    let source = r#"
        void main() {
            return 1;
            print("after");
        }
    "#;

    assert_eq!(output_of(source), "after");
}

#[test]
fn test_division_by_zero_stops_run() {
    let source = r#"
        void main() {
            int a = 5;
            int b = 0;
            print(a / b);
            print(a);
        }
    "#;

    let result = run_source(source, Terminal::captured());

    match result {
        Err(Error::Runtime(RuntimeError::DivisionByZero { location })) => {
            assert_eq!(location.line, 5);
        }
        other => panic!("Expected division by zero, got {:?}", other.map(|(_, v)| v)),
    }
}

#[test]
fn test_undefined_variable_stops_run() {
    let result = run_source("void main() { print(z); }", Terminal::captured());

    match result {
        Err(Error::Runtime(RuntimeError::UndefinedVariable { name, .. })) => assert_eq!(name, "z"),
        other => panic!("Expected undefined variable, got {:?}", other.map(|(_, v)| v)),
    }
}

#[test]
fn test_missing_entry_point() {
    let result = run_source("int x = 1;", Terminal::captured());

    match result {
        Err(Error::Parse(e)) => {
            assert!(e.to_string().contains("couldn't find main function"));
        }
        other => panic!("Expected parse error, got {:?}", other.map(|(_, v)| v)),
    }
}

#[test]
fn test_unknown_characters_are_skipped() {
    let (interpreter, _) =
        run_source("void main() { print(1 @ ); }", Terminal::captured()).expect("Execution failed");

    assert_eq!(interpreter.terminal().output(), "1");

    let diagnostics = interpreter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "line 1, column 23: Unknown character '@'");
}

#[test]
fn test_lexer_warnings_precede_runtime_warnings() {
    let (interpreter, _) =
        run_source("void main() { int x; print(x $); }", Terminal::captured()).expect("Execution failed");

    let messages: Vec<&str> = interpreter
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "Unknown character '$'");
    assert!(messages[1].contains("'x'"));
}
