use vsh_syntax::FN_PREFIX;

use crate::builtins;
use crate::core::{Opts, Value};
use crate::errors::Error;
use crate::eval::{BuiltinFn, EvalCtx, Scope};
use crate::variable::Variable;

pub type BuiltinImpl = fn(&mut EvalCtx, &[Value], &Opts) -> Result<(), Error>;

pub struct BuiltinRegistry {
    entries: Vec<(String, BuiltinImpl)>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, name: &str, fun: BuiltinImpl) {
        self.entries.push((name.to_string(), fun));
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Bind every entry as a read-only `fn-NAME` variable.
    pub fn install_into(self, scope: &mut Scope) {
        for (name, fun) in self.entries {
            let value = Value::Fn(BuiltinFn::new(&name, fun));
            scope.define(format!("{FN_PREFIX}{name}"), Variable::read_only(value));
        }
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub trait BuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry);
}

pub struct StdBuiltinProvider;

impl BuiltinProvider for StdBuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry) {
        registry.register("put", builtins::builtin_put);
        registry.register("echo", builtins::builtin_echo);
        registry.register("repr", builtins::builtin_repr);
        registry.register("count", builtins::builtin_count);
        registry.register("bool", builtins::builtin_bool);
        registry.register("not", builtins::builtin_not);
    }
}
