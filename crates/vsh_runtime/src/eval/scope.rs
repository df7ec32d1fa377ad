use ahash::RandomState;
use indexmap::IndexMap;

use crate::variable::Variable;

/// A set of named variables. Names are kept in definition order.
#[derive(Clone, Debug)]
pub struct Scope {
    vars: IndexMap<String, Variable, RandomState>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            vars: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Bind `name`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, variable: Variable) {
        let name = name.into();
        tracing::trace!(name = %name, "define");
        self.vars.insert(name, variable);
    }

    /// A handle to the variable; it aliases the scope's storage.
    pub fn get(&self, name: &str) -> Option<Variable> {
        self.vars.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Variable> {
        self.vars.shift_remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
