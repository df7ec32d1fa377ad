//! Variables: named binding slots with pluggable storage.
//!
//! A [`Variable`] is a cheap handle; clones alias the same storage, so a scope
//! entry and anything derived from it observe each other's writes.

mod elem;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub use elem::ElemVariable;

use crate::core::{Text, Value};
use crate::errors::Error;
use crate::util::Environ;

pub type Validator = Rc<dyn Fn(&Value) -> Result<(), Error>>;
pub type Getter = Rc<dyn Fn() -> Value>;
pub type Setter = Rc<dyn Fn(Value) -> Result<(), Error>>;

#[derive(Clone)]
pub enum Variable {
    /// Plain storage, optionally guarded by a validator.
    Ptr {
        value: Rc<RefCell<Value>>,
        validator: Option<Validator>,
    },
    /// Constant fixed at construction.
    Ro(Value),
    Callback { get: Getter, set: Setter },
    RoCallback(Getter),
    /// An entry of the environment, read and written as text.
    Env { name: String, environ: Rc<dyn Environ> },
    /// An element reached through indices, see [`ElemVariable`].
    Elem(Rc<ElemVariable>),
    /// Swallows every write; reading is an error.
    Blackhole,
}

impl Variable {
    pub fn new(value: Value) -> Self {
        Variable::Ptr {
            value: Rc::new(RefCell::new(value)),
            validator: None,
        }
    }

    pub fn with_validator<F>(value: Value, validator: F) -> Self
    where
        F: Fn(&Value) -> Result<(), Error> + 'static,
    {
        Variable::Ptr {
            value: Rc::new(RefCell::new(value)),
            validator: Some(Rc::new(validator)),
        }
    }

    pub fn read_only(value: Value) -> Self {
        Variable::Ro(value)
    }

    pub fn from_callbacks<S, G>(set: S, get: G) -> Self
    where
        S: Fn(Value) -> Result<(), Error> + 'static,
        G: Fn() -> Value + 'static,
    {
        Variable::Callback {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    pub fn read_only_callback<G>(get: G) -> Self
    where
        G: Fn() -> Value + 'static,
    {
        Variable::RoCallback(Rc::new(get))
    }

    pub fn env(name: impl Into<String>, environ: Rc<dyn Environ>) -> Self {
        Variable::Env {
            name: name.into(),
            environ,
        }
    }

    pub fn blackhole() -> Self {
        Variable::Blackhole
    }

    pub fn get(&self) -> Result<Value, Error> {
        match self {
            Variable::Ptr { value, .. } => Ok(value.borrow().clone()),
            Variable::Ro(value) => Ok(value.clone()),
            Variable::Callback { get, .. } | Variable::RoCallback(get) => Ok(get()),
            Variable::Env { name, environ } => {
                Ok(Value::Str(environ.get(name).map(Text::from_string).unwrap_or_default()))
            }
            Variable::Elem(elem) => elem.get(),
            Variable::Blackhole => Err(Error::BlackholeRead),
        }
    }

    pub fn set(&self, new: Value) -> Result<(), Error> {
        match self {
            Variable::Ptr { value, validator } => {
                if let Some(validate) = validator {
                    validate(&new).map_err(|e| Error::InvalidValue(Box::new(e)))?;
                }
                *value.borrow_mut() = new;
                Ok(())
            }
            Variable::Ro(_) | Variable::RoCallback(_) => Err(Error::ReadOnly),
            Variable::Callback { set, .. } => set(new),
            Variable::Env { name, environ } => {
                let text = new.to_text_string();
                tracing::debug!(name = %name, "setting environment variable");
                environ.set(name, &text)
            }
            Variable::Elem(elem) => elem.set(new),
            Variable::Blackhole => Ok(()),
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Variable::Ro(_) | Variable::RoCallback(_))
    }

    /// Two handles to the same storage.
    pub fn same_slot(&self, other: &Variable) -> bool {
        match (self, other) {
            (Variable::Ptr { value: a, .. }, Variable::Ptr { value: b, .. }) => Rc::ptr_eq(a, b),
            (Variable::Elem(a), Variable::Elem(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Variable::Ptr { validator: None, .. } => "ptr",
            Variable::Ptr { validator: Some(_), .. } => "validated",
            Variable::Ro(_) => "ro",
            Variable::Callback { .. } => "callback",
            Variable::RoCallback(_) => "ro-callback",
            Variable::Env { .. } => "env",
            Variable::Elem(_) => "elem",
            Variable::Blackhole => "blackhole",
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Env { name, .. } => write!(f, "Variable::env({name:?})"),
            Variable::Ptr { value, .. } => write!(f, "Variable::{}({:?})", self.kind(), value.borrow()),
            Variable::Ro(value) => write!(f, "Variable::ro({value:?})"),
            other => write!(f, "Variable::{}", other.kind()),
        }
    }
}
