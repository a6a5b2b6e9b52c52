//! C++ source generation
//!
//! Translates a parsed [`Program`] into a single `int main()` C++ translation
//! unit. Generation is best-effort and never fails: constructs the translator
//! does not handle (comparisons, `if`, `while`, nested blocks, `return`) come
//! out as the integer placeholder `0`. Every declaration is emitted as `int`,
//! whatever the runtime kind of its initializer.
//!
//! [`compile_file`] wraps the whole file pipeline (read, lex, parse, generate,
//! write next to the input with a `.cpp` extension) and is shared by the
//! `compile` built-in and the `-c` command-line mode.

use crate::parser::ast::{AstNode, Program};
use crate::parser::parse::{ParseError, Parser};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extension given to generated files
pub const OUTPUT_EXTENSION: &str = "cpp";

const PREAMBLE: &str = "#include <iostream>\n#include <string>\n\nint main() {\n";
const EPILOGUE: &str = "    return 0;\n}\n";
const INDENT: &str = "    ";

/// Placeholder emitted for anything the translator does not handle
const PLACEHOLDER: &str = "0";

/// Errors from the file-level compile pipeline
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Could not open file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to compile {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("Could not write file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Generate the complete C++ source for `program`
pub fn generate(program: &Program) -> String {
    let mut code = String::from(PREAMBLE);

    for stmt in &program.main.body {
        code.push_str(INDENT);
        code.push_str(&generate_statement(stmt));
        code.push('\n');
    }

    code.push_str(EPILOGUE);
    code
}

fn generate_statement(node: &AstNode) -> String {
    match node {
        AstNode::VarDecl {
            name,
            init: Some(init),
            ..
        } => format!("int {} = {};", name, generate_expression(init)),
        AstNode::VarDecl {
            name, init: None, ..
        } => format!("int {};", name),
        AstNode::Assignment { name, value, .. } => {
            format!("{} = {};", name, generate_expression(value))
        }
        other => format!("{};", generate_expression(other)),
    }
}

fn generate_expression(node: &AstNode) -> String {
    match node {
        AstNode::IntLiteral(n, _) => n.to_string(),
        AstNode::StringLiteral(s, _) => format!("\"{}\"", escape(s)),
        AstNode::Variable(name, _) => name.clone(),
        AstNode::Arithmetic {
            op, left, right, ..
        } => format!(
            "({} {} {})",
            generate_expression(left),
            op.symbol(),
            generate_expression(right)
        ),
        AstNode::FunctionCall { name, args, .. } if name == "print" => {
            let arg = args
                .first()
                .map(generate_expression)
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            format!("std::cout << {}", arg)
        }
        AstNode::FunctionCall { name, .. } => format!("{}()", name),
        AstNode::Comparison { .. }
        | AstNode::Block { .. }
        | AstNode::VarDecl { .. }
        | AstNode::Assignment { .. }
        | AstNode::If { .. }
        | AstNode::While { .. }
        | AstNode::Return { .. } => PLACEHOLDER.to_string(),
    }
}

/// Re-escape a string literal's contents for C++
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out
}

/// Lex, parse and generate C++ for `source`
pub fn compile_source(source: &str) -> Result<String, ParseError> {
    let mut parser = Parser::new(source)?;
    let program = parser.parse_program()?;
    Ok(generate(&program))
}

/// Sibling of `input` with the extension replaced by `.cpp`
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// The line printed after a successful compile
pub fn confirmation(input: &Path, output: &Path) -> String {
    format!("Compiled {} to {}\n", input.display(), output.display())
}

/// Compile `input` to C++ and write it to `output` (or the default sibling
/// path). Returns the path written.
pub fn compile_file(input: &Path, output: Option<&Path>) -> Result<PathBuf, CompileError> {
    let source = fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    emit_file(input, &source, output)
}

/// Compile already-read `source` belonging to `input` and write the result
pub fn emit_file(input: &Path, source: &str, output: Option<&Path>) -> Result<PathBuf, CompileError> {
    let code = compile_source(source).map_err(|source| CompileError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let output = output.map_or_else(|| output_path_for(input), Path::to_path_buf);
    fs::write(&output, code).map_err(|source| CompileError::Write {
        path: output.clone(),
        source,
    })?;

    info!("compiled {} to {}", input.display(), output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time drift")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "npavc-codegen-{}-{}-{}",
            prefix,
            std::process::id(),
            nonce
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn body_of(generated: &str) -> Vec<&str> {
        generated
            .strip_prefix(PREAMBLE)
            .and_then(|rest| rest.strip_suffix(EPILOGUE))
            .expect("preamble and epilogue")
            .lines()
            .collect()
    }

    #[test]
    fn test_empty_program() {
        let code = compile_source("void main() { }").unwrap();

        assert_eq!(
            code,
            "#include <iostream>\n#include <string>\n\nint main() {\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_statements() {
        let code =
            compile_source("void main() { int x = 2; int y; y = x * 3 + 1; print(y); }").unwrap();

        assert_eq!(
            body_of(&code),
            vec![
                "    int x = 2;",
                "    int y;",
                "    y = ((x * 3) + 1);",
                "    std::cout << y;",
            ]
        );
    }

    #[test]
    fn test_strings_are_reescaped() {
        let code = compile_source(r#"void main() { print("a\tb\n\"q\""); }"#).unwrap();

        assert_eq!(body_of(&code), vec![r#"    std::cout << "a\tb\n\"q\"";"#]);
    }

    #[test]
    fn test_text_declarations_still_use_int() {
        let code = compile_source(r#"void main() { int s = "hi"; }"#).unwrap();

        assert_eq!(body_of(&code), vec![r#"    int s = "hi";"#]);
    }

    #[test]
    fn test_unsupported_constructs_degrade_to_zero() {
        let code = compile_source(
            "void main() { if (1) print(1); while (0) { } { } return 5; int c = 1 < 2; foo(1, 2); print(); }",
        )
        .unwrap();

        assert_eq!(
            body_of(&code),
            vec![
                "    0;",
                "    0;",
                "    0;",
                "    0;",
                "    int c = 0;",
                "    foo();",
                "    std::cout << 0;",
            ]
        );
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path_for(Path::new("dir/prog.npavc")),
            PathBuf::from("dir/prog.cpp")
        );
        assert_eq!(output_path_for(Path::new("prog")), PathBuf::from("prog.cpp"));
    }

    #[test]
    fn test_compile_file_is_idempotent() {
        let dir = temp_dir("idempotent");
        let input = dir.join("f.npavc");
        fs::write(&input, "void main() { int x = 1; x = x + 1; print(x); }").unwrap();

        let first_path = compile_file(&input, None).unwrap();
        let first = fs::read(&first_path).unwrap();
        let second_path = compile_file(&input, None).unwrap();
        let second = fs::read(&second_path).unwrap();

        assert_eq!(first_path, dir.join("f.cpp"));
        assert_eq!(first_path, second_path);
        assert_eq!(first, second);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_compile_file_errors() {
        let dir = temp_dir("errors");

        let missing = dir.join("missing.npavc");
        assert!(matches!(
            compile_file(&missing, None),
            Err(CompileError::Read { .. })
        ));

        let broken = dir.join("broken.npavc");
        fs::write(&broken, "int main() { }").unwrap();
        assert!(matches!(
            compile_file(&broken, None),
            Err(CompileError::Parse { .. })
        ));
        assert!(!dir.join("broken.cpp").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
