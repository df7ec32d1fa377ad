use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use super::EvalCtx;
use crate::core::{Opts, Text, Value};
use crate::errors::Error;

type BuiltinImpl = dyn Fn(&mut EvalCtx, &[Value], &Opts) -> Result<(), Error> + Send + Sync;

/// A function implemented by the runtime.
#[derive(Clone)]
pub struct BuiltinFn {
    name: Text,
    imp: Arc<BuiltinImpl>,
}

impl BuiltinFn {
    pub fn new<F>(name: &str, imp: F) -> Self
    where
        F: Fn(&mut EvalCtx, &[Value], &Opts) -> Result<(), Error> + Send + Sync + 'static,
    {
        Self {
            name: Text::from_str(name),
            imp: Arc::new(imp),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn call(&self, ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
        (self.imp)(ctx, args, opts)
    }
}

impl PartialEq for BuiltinFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.imp), Arc::as_ptr(&other.imp))
    }
}

impl Eq for BuiltinFn {}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}

/// A program to be looked up on the search path when called. Nothing is
/// checked until then.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExternalCmd {
    name: Text,
}

impl ExternalCmd {
    pub fn new(name: impl Into<Text>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn call(&self, ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
        if !opts.is_empty() {
            return Err(Error::ExternalCmdOpts);
        }
        let argv: SmallVec<[String; 4]> = args.iter().map(Value::to_text_string).collect();
        let code = ctx.spawner().run(self.name(), &argv)?;
        if code != 0 {
            return Err(Error::ExternalCmdExit {
                name: self.name().to_string(),
                code,
            });
        }
        Ok(())
    }
}

/// Anything that can be the head of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Callable {
    Builtin(BuiltinFn),
    External(ExternalCmd),
}

impl Callable {
    pub fn call(&self, ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
        match self {
            Callable::Builtin(f) => f.call(ctx, args, opts),
            Callable::External(cmd) => cmd.call(ctx, args, opts),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Callable::Builtin(f) => Value::Fn(f),
            Callable::External(cmd) => Value::External(cmd),
        }
    }
}
