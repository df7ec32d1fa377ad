//! System capability traits for dependency injection.

use std::cell::RefCell;
use std::process::Command;
use std::rc::Rc;

use crate::core::{FastHashMap, fast_map_new};
use crate::errors::Error;

/// Key-value view of the process environment.
pub trait Environ {
    /// `None` when the entry is unset.
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str) -> Result<(), Error>;
}

/// Entries with these names or values cannot be represented in a real
/// environment block.
fn check_entry(name: &str, value: &str) -> Result<(), Error> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(Error::BadEnvName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(Error::InvalidValue(Box::new(Error::failure(
            "environment value contains NUL",
        ))));
    }
    Ok(())
}

pub struct ProcessEnviron;

impl Environ for ProcessEnviron {
    fn get(&self, name: &str) -> Option<String> {
        if check_entry(name, "").is_err() {
            return None;
        }
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), Error> {
        check_entry(name, value)?;
        // SAFETY: the runtime mutates a binding from one thread at a time;
        // callers that share the process with other threads serialize access.
        unsafe { std::env::set_var(name, value) };
        Ok(())
    }
}

/// Environment kept in memory, for embedding and tests.
#[derive(Default)]
pub struct MapEnviron {
    vars: RefCell<FastHashMap<String, String>>,
}

impl MapEnviron {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(fast_map_new()),
        }
    }

    pub fn with(self, name: &str, value: &str) -> Self {
        self.vars.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }
}

impl Environ for MapEnviron {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) -> Result<(), Error> {
        check_entry(name, value)?;
        self.vars.borrow_mut().insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Runs external programs and reports their exit code.
pub trait ProcessSpawner {
    fn run(&self, name: &str, args: &[String]) -> Result<i32, Error>;
}

pub struct StdSpawner;

impl ProcessSpawner for StdSpawner {
    fn run(&self, name: &str, args: &[String]) -> Result<i32, Error> {
        let status = Command::new(name).args(args).status().map_err(|e| Error::Exec {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        // Killed by a signal.
        Ok(status.code().unwrap_or(-1))
    }
}

pub struct Capabilities {
    pub environ: Rc<dyn Environ>,
    pub spawner: Box<dyn ProcessSpawner>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            environ: Rc::new(ProcessEnviron),
            spawner: Box::new(StdSpawner),
        }
    }
}
