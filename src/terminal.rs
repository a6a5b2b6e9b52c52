// Output sink for `print` and `compile`

use std::io::{self, Write};

/// Where program output goes.
///
/// `Stdout` is what the command-line driver uses. `Captured` keeps everything
/// in memory so embedders and tests can inspect the exact text a run produced.
#[derive(Debug, Clone, Default)]
pub enum Terminal {
    #[default]
    Stdout,
    Captured(String),
}

impl Terminal {
    pub fn captured() -> Self {
        Terminal::Captured(String::new())
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        match self {
            Terminal::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()
            }
            Terminal::Captured(buffer) => {
                buffer.push_str(text);
                Ok(())
            }
        }
    }

    /// Everything printed so far; always empty for `Stdout`
    pub fn output(&self) -> &str {
        match self {
            Terminal::Stdout => "",
            Terminal::Captured(buffer) => buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_output_has_no_separators() {
        let mut terminal = Terminal::captured();
        terminal.print("0").unwrap();
        terminal.print("1").unwrap();
        terminal.print("2\n").unwrap();

        assert_eq!(terminal.output(), "012\n");
    }
}
