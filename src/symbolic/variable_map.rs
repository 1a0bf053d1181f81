//! # Variable Environment Module
//!
//! Maps variable names to the expressions bound to them. Bindings are whole
//! expressions rather than raw numbers, so one variable may be defined in
//! terms of another; evaluation resolves such chains recursively.
//!
//! There is no cycle detection: a binding chain that cycles back to itself
//! recurses without bound. Avoiding cycles is the caller's responsibility.

use crate::symbolic::errors::{Result, SymbolicError};
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use std::collections::HashMap;

/// name -> expression bindings consulted during evaluation and
/// differentiation of symbolic variables.
///
/// # Examples
/// ```rust
/// use RustedCAS::symbolic::symbolic_engine::Expr;
/// use RustedCAS::symbolic::variable_map::VariableMap;
/// let mut vm = VariableMap::new();
/// vm.set("x", Expr::Number(2.into()));
/// vm.set("y", Expr::parse_expression("x + 1").unwrap());
/// assert_eq!(vm.evaluate("y").unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableMap {
    map: HashMap<String, Expr>,
}

impl VariableMap {
    /// Creates an empty environment.
    pub fn new() -> Self {
        VariableMap { map: HashMap::new() }
    }

    /// Inserts or overwrites the binding for `name`.
    pub fn set(&mut self, name: &str, expr: Expr) {
        debug!("binding {} = {}", name, expr);
        self.map.insert(name.to_string(), expr);
    }

    /// Deletes the binding for `name` and returns it.
    ///
    /// Removing an absent name is an error, not a no-op.
    pub fn remove(&mut self, name: &str) -> Result<Expr> {
        debug!("unbinding {}", name);
        self.map
            .remove(name)
            .ok_or_else(|| SymbolicError::UndefinedVariable(name.to_string()))
    }

    /// Returns the expression bound to `name`.
    pub fn get(&self, name: &str) -> Result<&Expr> {
        self.map
            .get(name)
            .ok_or_else(|| SymbolicError::UnboundVariable(name.to_string()))
    }

    /// Looks up `name` and evaluates its binding in this environment.
    pub fn evaluate(&self, name: &str) -> Result<f64> {
        self.get(name)?.evaluate(Some(self))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<HashMap<String, Expr>> for VariableMap {
    fn from(map: HashMap<String, Expr>) -> Self {
        VariableMap { map }
    }
}

impl<S: Into<String>> FromIterator<(S, Expr)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (S, Expr)>>(iter: I) -> Self {
        VariableMap {
            map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
