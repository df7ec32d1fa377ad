//! Runtime value representation.
//!
//! Every value is immutable and cheap to clone; containers share their
//! storage behind an `Arc`, so values can be read from any thread.

use std::fmt;
use std::hash::{Hash, Hasher};

use ahash::RandomState;
use hashbrown::HashMap;

use super::list::List;
use super::text::Text;
use crate::errors::Error;
use crate::eval::{BuiltinFn, Callable, EvalCtx, ExternalCmd};

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

#[inline]
pub fn fast_map_new<K, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}

/// Named options passed alongside positional arguments in a call.
pub type Opts = FastHashMap<String, Value>;

/// Seeds for [`Value::hash_code`]; fixed so the code is stable across runs.
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// A sequence that supports indexed reads and functional updates.
///
/// Indices are passed as values and read through the index grammar, so
/// `"-1"` and `"1:3"` work the same for every implementor.
pub trait Indexable {
    /// Element count in the sequence's natural unit.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index_one(&self, idx: &Value) -> Result<Value, Error>;

    /// Returns a new value with the indexed position or range replaced.
    fn assoc(&self, idx: &Value, replacement: Value) -> Result<Value, Error>;

    /// One-element values in order. Calling again starts over.
    fn iterate(&self) -> Box<dyn Iterator<Item = Value> + '_>;
}

#[derive(Clone)]
pub enum Value {
    Str(Text),
    Bool(bool),
    List(List),
    Fn(BuiltinFn),
    External(ExternalCmd),
}

impl Value {
    pub fn str(s: impl Into<Text>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Fn(_) => "fn",
            Value::External(_) => "external",
        }
    }

    /// Canonical representation; strings come out as literals that read back
    /// to the same text.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => vsh_syntax::quote(s),
            Value::Bool(true) => "$true".to_string(),
            Value::Bool(false) => "$false".to_string(),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::repr).collect();
                format!("[{}]", parts.join(" "))
            }
            Value::Fn(f) => format!("<builtin {}>", f.name()),
            Value::External(cmd) => format!("<external {}>", cmd.name()),
        }
    }

    /// Text conversion: strings yield themselves, everything else its repr.
    pub fn to_text_string(&self) -> String {
        match self {
            Value::Str(s) => s.as_str().to_string(),
            other => other.repr(),
        }
    }

    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.as_slice().is_empty(),
            Value::Fn(_) | Value::External(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_indexable(&self) -> Option<&dyn Indexable> {
        match self {
            Value::Str(s) => Some(s as &dyn Indexable),
            Value::List(l) => Some(l as &dyn Indexable),
            _ => None,
        }
    }

    fn indexable(&self) -> Result<&dyn Indexable, Error> {
        self.as_indexable().ok_or(Error::CannotIndex { kind: self.kind() })
    }

    pub fn index_one(&self, idx: &Value) -> Result<Value, Error> {
        self.indexable()?.index_one(idx)
    }

    pub fn assoc(&self, idx: &Value, replacement: Value) -> Result<Value, Error> {
        self.indexable()?.assoc(idx, replacement)
    }

    pub fn callable(&self) -> Option<Callable> {
        match self {
            Value::Fn(f) => Some(Callable::Builtin(f.clone())),
            Value::External(cmd) => Some(Callable::External(cmd.clone())),
            _ => None,
        }
    }

    /// Call this value. A string is treated as a command name and resolved
    /// in `ctx` first.
    pub fn call(&self, ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
        let callable = match self {
            Value::Str(name) => crate::eval::resolve(name, ctx),
            other => other
                .callable()
                .ok_or(Error::NotCallable { kind: other.kind() })?,
        };
        callable.call(ctx, args, opts)
    }

    /// Hash consistent with `==`, stable across processes.
    pub fn hash_code(&self) -> u64 {
        let [k0, k1, k2, k3] = HASH_SEEDS;
        RandomState::with_seeds(k0, k1, k2, k3).hash_one(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Fn(a), Value::Fn(b)) => a == b,
            (Value::External(a), Value::External(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Str(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::List(items) => items.hash(state),
            Value::Fn(f) => f.name().hash(state),
            Value::External(cmd) => cmd.name().hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Text::from_str(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Text::from_string(s))
    }
}

impl From<Text> for Value {
    fn from(s: Text) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}
