use std::cell::RefCell;

use smallvec::SmallVec;

use super::Variable;
use crate::core::Value;
use crate::errors::Error;

type Path = SmallVec<[Value; 4]>;

/// An element of a variable's value, reached through one or more indices,
/// as in the assignment target `$root[i0][i1]`.
///
/// The containers along the path are captured when the binding is built.
/// Setting rebuilds each of them from the innermost outwards with
/// [`Value::assoc`] and writes the outermost result to the root variable.
///
/// `get` does not walk the path again. It returns the last value passed to
/// `set`, which is all that callers re-reading an assignment target need.
pub struct ElemVariable {
    variable: Variable,
    assocers: Path,
    indices: Path,
    set_value: RefCell<Option<Value>>,
}

impl ElemVariable {
    /// Capture the path `indices` into the current value of `variable`.
    ///
    /// The root is read once. Every container on the path must be
    /// indexable, and every index but the last must resolve.
    pub fn resolve(variable: Variable, indices: &[Value]) -> Result<Self, Error> {
        if indices.is_empty() {
            return Err(Error::EmptyIndexPath);
        }
        let mut assocers = Path::with_capacity(indices.len());
        let mut current = variable.get()?;
        for index in &indices[..indices.len() - 1] {
            let next = current.index_one(index)?;
            assocers.push(std::mem::replace(&mut current, next));
        }
        if current.as_indexable().is_none() {
            return Err(Error::CannotIndex { kind: current.kind() });
        }
        assocers.push(current);
        Ok(Self::new(variable, assocers, indices.iter().cloned().collect()))
    }

    /// Build from an already captured path. `assocers[i]` is indexed by
    /// `indices[i]` to reach `assocers[i + 1]`.
    pub fn new(variable: Variable, assocers: Path, indices: Path) -> Self {
        debug_assert_eq!(assocers.len(), indices.len());
        Self {
            variable,
            assocers,
            indices,
            set_value: RefCell::new(None),
        }
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    pub fn set(&self, v0: Value) -> Result<(), Error> {
        let mut v = v0.clone();
        for (assocer, index) in self.assocers.iter().zip(&self.indices).rev() {
            v = assocer.assoc(index, v)?;
        }
        tracing::trace!(depth = self.depth(), "writing element back to root");
        self.variable.set(v)?;
        *self.set_value.borrow_mut() = Some(v0);
        Ok(())
    }

    pub fn get(&self) -> Result<Value, Error> {
        self.set_value.borrow().clone().ok_or(Error::ElemNotSet)
    }
}
