//! vsh value and variable runtime.

#![allow(clippy::new_without_default)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::len_without_is_empty)]

pub mod core;
pub mod errors;
pub mod eval;
pub mod variable;
mod builtins;
pub mod builtins_registry;
mod util;

// Re-exports from core/
pub use crate::core::text::Text;
pub use crate::core::list::List;
pub use crate::core::value::{FastHashMap, Indexable, Opts, Value, fast_map_new};

pub use errors::{Error, ErrorKind, IndexFault};

pub use eval::{BuiltinFn, Callable, EvalCtx, ExternalCmd, Scope, resolve};
pub use variable::{ElemVariable, Variable};

// Re-exports from util/
pub use util::{Capabilities, Environ, MapEnviron, ProcessEnviron, ProcessSpawner, StdSpawner};

pub use builtins_registry::{BuiltinProvider, BuiltinRegistry, StdBuiltinProvider};
