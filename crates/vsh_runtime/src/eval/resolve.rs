use vsh_syntax::{FN_PREFIX, parse_variable};

use super::EvalCtx;
use super::callable::{Callable, ExternalCmd};

/// Resolve a command name to a callable.
///
/// A function bound as `fn-NAME` (qualified by the name's namespace) wins;
/// anything else becomes an external command. Whether that program exists
/// is only found out when it is called.
pub fn resolve(name: &str, ctx: &EvalCtx) -> Callable {
    let var = parse_variable(name);
    if !var.explode {
        let fn_name = format!("{FN_PREFIX}{}", var.name);
        if let Some(callable) = ctx
            .resolve_var(var.ns, &fn_name)
            .and_then(|v| v.get().ok())
            .and_then(|v| v.callable())
        {
            return callable;
        }
    }
    tracing::debug!(name, "no function binding; using external command");
    Callable::External(ExternalCmd::new(name))
}
