//! Evaluation context: scopes, namespace lookup and assignment targets.
//!
//! Lookups follow the namespace of a variable reference:
//! - `local:` and `up:` search the current and the enclosing scopes
//! - `builtin:` searches the builtins
//! - no namespace searches local, then enclosing, then builtin
//! - `e:` turns `fn-NAME` into the external command `NAME`
//! - `E:` is the environment
//! - anything else names a module

mod callable;
mod resolve;
mod scope;

use std::rc::Rc;

pub use callable::{BuiltinFn, Callable, ExternalCmd};
pub use resolve::resolve;
pub use scope::Scope;
use vsh_syntax::{FN_PREFIX, parse_variable};

use crate::builtins_registry::{BuiltinProvider, BuiltinRegistry, StdBuiltinProvider};
use crate::core::{FastHashMap, Opts, Value, fast_map_new};
use crate::errors::Error;
use crate::util::{Capabilities, Environ, ProcessSpawner};
use crate::variable::{ElemVariable, Variable};

pub struct EvalCtx {
    pub local: Scope,
    /// Enclosing scopes, outermost first.
    pub up: Vec<Scope>,
    pub builtin: Scope,
    pub modules: FastHashMap<String, Scope>,
    caps: Capabilities,
    output: Vec<Value>,
}

impl EvalCtx {
    pub fn new() -> Self {
        Self::with_builtins(&StdBuiltinProvider)
    }

    pub fn with_builtins(provider: &dyn BuiltinProvider) -> Self {
        let mut registry = BuiltinRegistry::new();
        provider.install(&mut registry);
        let mut builtin = Scope::new();
        registry.install_into(&mut builtin);
        Self {
            local: Scope::new(),
            up: Vec::new(),
            builtin,
            modules: fast_map_new(),
            caps: Capabilities::default(),
            output: Vec::new(),
        }
    }

    pub fn set_environ(&mut self, environ: Rc<dyn Environ>) {
        self.caps.environ = environ;
    }

    pub fn set_spawner(&mut self, spawner: Box<dyn ProcessSpawner>) {
        self.caps.spawner = spawner;
    }

    pub fn environ(&self) -> Rc<dyn Environ> {
        self.caps.environ.clone()
    }

    pub fn spawner(&self) -> &dyn ProcessSpawner {
        self.caps.spawner.as_ref()
    }

    /// Values produced by builtins so far.
    pub fn output(&self) -> &[Value] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.output)
    }

    pub fn emit(&mut self, value: Value) {
        self.output.push(value);
    }

    /// Enter a new local scope; the current one becomes enclosing.
    pub fn push_scope(&mut self) {
        let outer = std::mem::take(&mut self.local);
        self.up.push(outer);
    }

    /// Leave the current local scope, discarding its variables.
    pub fn pop_scope(&mut self) {
        self.local = self.up.pop().unwrap_or_default();
    }

    pub fn add_module(&mut self, name: impl Into<String>, scope: Scope) {
        self.modules.insert(name.into(), scope);
    }

    fn get_up(&self, name: &str) -> Option<Variable> {
        self.up.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn resolve_var(&self, ns: &str, name: &str) -> Option<Variable> {
        match ns {
            "local" => self.local.get(name),
            "up" => self.get_up(name),
            "builtin" => self.builtin.get(name),
            "" => self
                .local
                .get(name)
                .or_else(|| self.get_up(name))
                .or_else(|| self.builtin.get(name)),
            "e" => name
                .strip_prefix(FN_PREFIX)
                .map(|cmd| Variable::read_only(Value::External(ExternalCmd::new(cmd)))),
            "E" => Some(Variable::env(name, self.environ())),
            module => self.modules.get(module).and_then(|scope| scope.get(name)),
        }
    }

    /// Look up a full reference such as `x`, `local:x` or `E:HOME`.
    pub fn resolve_ref(&self, text: &str) -> Option<Variable> {
        let var = parse_variable(text);
        self.resolve_var(var.ns, var.name)
    }

    /// Assign to the variable named by `text`. An unqualified or `local:`
    /// name that doesn't exist yet is created in the local scope.
    pub fn assign(&mut self, text: &str, value: Value) -> Result<(), Error> {
        let var = parse_variable(text);
        if let Some(existing) = self.resolve_var(var.ns, var.name) {
            return existing.set(value);
        }
        match var.ns {
            "" | "local" => {
                self.local.define(var.name, Variable::new(value));
                Ok(())
            }
            _ => Err(Error::VariableNotFound(text.to_string())),
        }
    }

    /// The assignment target `$text[indices[0]][indices[1]]...`.
    pub fn elem_variable(&self, text: &str, indices: &[Value]) -> Result<Variable, Error> {
        let root = self
            .resolve_ref(text)
            .ok_or_else(|| Error::VariableNotFound(text.to_string()))?;
        let elem = ElemVariable::resolve(root, indices)?;
        Ok(Variable::Elem(Rc::new(elem)))
    }

    pub fn assign_indexed(&mut self, text: &str, indices: &[Value], value: Value) -> Result<(), Error> {
        self.elem_variable(text, indices)?.set(value)
    }

    /// Call `head` with the given arguments; a string head is a command name.
    pub fn call(&mut self, head: &Value, args: &[Value], opts: &Opts) -> Result<(), Error> {
        head.call(self, args, opts)
    }
}

impl Default for EvalCtx {
    fn default() -> Self {
        Self::new()
    }
}
