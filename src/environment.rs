use std::collections::HashMap;

use crate::value::RuntimeValue;

/// One scope of bindings. The enclosing scope is borrowed, so it must
/// outlive every scope created under it.
pub struct Environment<'p> {
    enclosing: Option<&'p Environment<'p>>,
    values: HashMap<String, RuntimeValue>,
}

impl<'p> Environment<'p> {
    pub fn new() -> Self {
        Self {
            enclosing: None,
            values: HashMap::new(),
        }
    }

    pub fn with_enclosing(enclosing: &'p Environment<'p>) -> Self {
        Self {
            enclosing: Some(enclosing),
            values: HashMap::new(),
        }
    }

    /// Inserts or replaces a binding in this scope. Returns whether the name
    /// was new here.
    pub fn define(&mut self, name: &str, value: RuntimeValue) -> bool {
        self.values.insert(name.to_string(), value).is_none()
    }

    pub fn get(&self, name: &str) -> Option<&RuntimeValue> {
        match self.values.get(name) {
            Some(value) => Some(value),
            None => self.enclosing.and_then(|enclosing| enclosing.get(name)),
        }
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_reports_new_names() {
        let mut environment = Environment::new();

        assert!(environment.define("a", RuntimeValue::Int(1)));
        assert!(!environment.define("a", RuntimeValue::Int(2)));
        assert_eq!(environment.get("a"), Some(&RuntimeValue::Int(2)));
        assert_eq!(environment.get("b"), None);
    }

    #[test]
    fn lookup_walks_outward_and_child_shadows() {
        let mut root = Environment::new();
        root.define("a", RuntimeValue::Int(1));
        root.define("b", RuntimeValue::Bool(true));

        let mut middle = Environment::with_enclosing(&root);
        middle.define("a", RuntimeValue::Char('m'));

        let leaf = Environment::with_enclosing(&middle);

        assert_eq!(leaf.get("a"), Some(&RuntimeValue::Char('m')));
        assert_eq!(leaf.get("b"), Some(&RuntimeValue::Bool(true)));
        assert_eq!(leaf.get("c"), None);
        assert_eq!(root.get("a"), Some(&RuntimeValue::Int(1)));
    }
}
