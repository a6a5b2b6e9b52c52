//! Memory model for the interpreter
//!
//! Variables live in one flat [`Environment`]: a name → [`Value`] map with no
//! nested scopes and no shadowing. Blocks do not introduce scopes, so a name
//! declared inside a loop body stays visible after the loop.
//!
//! Each interpreter owns its environment; nothing here is process-wide.

pub mod value;

use rustc_hash::FxHashMap;
use value::Value;

/// Flat variable storage
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, overwriting any previous value (declaration and assignment
    /// behave the same way).
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// All bindings sorted by name
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self.vars.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));
        env.set("x", Value::Text("one".to_string()));

        assert_eq!(env.sorted().len(), 1);
        assert_eq!(env.get("x"), Some(&Value::Text("one".to_string())));
    }

    #[test]
    fn test_missing_name() {
        let env = Environment::new();

        assert!(env.sorted().is_empty());
        assert_eq!(env.get("y"), None);
    }

    #[test]
    fn test_sorted_bindings() {
        let mut env = Environment::new();
        env.set("b", Value::Int(2));
        env.set("a", Value::Int(1));

        let names: Vec<&str> = env.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
