//! Non-fatal diagnostics
//!
//! A [`Diagnostic`] is recorded (and logged through `tracing`) whenever a stage
//! notices something suspicious but keeps going: an unrecognized character in
//! the lexer, or a variable declared without an initializer.

use crate::parser::ast::SourceLocation;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_location_and_message() {
        let diagnostic = Diagnostic::new("Unknown character '@'", SourceLocation::new(1, 24));

        assert_eq!(
            diagnostic.to_string(),
            "line 1, column 24: Unknown character '@'"
        );
    }
}
