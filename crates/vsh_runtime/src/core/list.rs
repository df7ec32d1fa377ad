//! Immutable list of values.

use std::sync::Arc;

use vsh_syntax::{ListIndex, parse_list_index};

use super::value::{Indexable, Value};
use crate::errors::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct List(Arc<Vec<Value>>);

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    fn resolve(&self, idx: &Value) -> Result<ListIndex, Error> {
        Ok(parse_list_index(&idx.to_text_string(), self.0.len())?)
    }
}

impl Indexable for List {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn index_one(&self, idx: &Value) -> Result<Value, Error> {
        Ok(match self.resolve(idx)? {
            ListIndex::Single(i) => self.0[i].clone(),
            ListIndex::Slice(i, j) => Value::List(self.0[i..j].iter().cloned().collect()),
        })
    }

    fn assoc(&self, idx: &Value, replacement: Value) -> Result<Value, Error> {
        let mut items: Vec<Value> = Vec::with_capacity(self.0.len());
        match self.resolve(idx)? {
            ListIndex::Single(i) => {
                items.extend(self.0.iter().cloned());
                items[i] = replacement;
            }
            ListIndex::Slice(i, j) => {
                let Value::List(repl) = replacement else {
                    return Err(Error::ReplacementMustBeList);
                };
                items.extend(self.0[..i].iter().cloned());
                items.extend(repl.iter().cloned());
                items.extend(self.0[j..].iter().cloned());
            }
        }
        Ok(Value::List(List::from(items)))
    }

    fn iterate(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        Box::new(self.0.iter().cloned())
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        List(Arc::new(items))
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List(Arc::new(iter.into_iter().collect()))
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
