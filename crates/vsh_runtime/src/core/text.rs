//! Immutable string type with small string optimization.
//!
//! Indexing goes through the shared index grammar with byte offsets, and only
//! ever lands on codepoint boundaries. Updates build a new `Text`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str;
use std::sync::{Arc, OnceLock};

use vsh_syntax::{ListIndex, parse_list_index};

use super::value::{Indexable, Value};
use crate::errors::{Error, IndexFault};

const INLINE_CAP: usize = 22;

#[derive(Clone)]
pub enum Text {
    Inline { len: u8, buf: [u8; INLINE_CAP] },
    Heap { data: Arc<str>, char_count: OnceLock<usize> },
}

impl Text {
    pub fn new() -> Self {
        Self::Inline {
            len: 0,
            buf: [0u8; INLINE_CAP],
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Text::Inline { len, buf } => {
                let s = &buf[..*len as usize];
                // SAFETY: inline bytes are only ever copied from a `&str`.
                unsafe { str::from_utf8_unchecked(s) }
            }
            Text::Heap { data, .. } => &**data,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Text::Inline { len, .. } => *len as usize,
            Text::Heap { data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of Unicode characters (not bytes)
    pub fn char_count(&self) -> usize {
        match self {
            Text::Inline { len, buf } => {
                let byte_len = *len as usize;
                let s = &buf[..byte_len];
                if s.is_ascii() {
                    byte_len
                } else {
                    self.as_str().chars().count()
                }
            }
            Text::Heap { data, char_count } => *char_count.get_or_init(|| data.chars().count()),
        }
    }

    pub fn from_str(s: &str) -> Self {
        if s.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..s.len()].copy_from_slice(s.as_bytes());
            return Self::Inline {
                len: s.len() as u8,
                buf,
            };
        }
        Self::Heap {
            data: Arc::from(s),
            char_count: OnceLock::new(),
        }
    }

    pub fn from_string(s: String) -> Self {
        if s.len() <= INLINE_CAP {
            return Self::from_str(&s);
        }
        Self::Heap {
            data: Arc::from(s),
            char_count: OnceLock::new(),
        }
    }

    /// Concatenate multiple strings efficiently by pre-calculating total length
    pub fn concat_many(parts: &[&str]) -> Text {
        let total: usize = parts.iter().map(|s| s.len()).sum();
        if total <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            let mut pos = 0;
            for s in parts {
                buf[pos..pos + s.len()].copy_from_slice(s.as_bytes());
                pos += s.len();
            }
            return Text::Inline {
                len: total as u8,
                buf,
            };
        }
        let mut out = String::with_capacity(total);
        for s in parts {
            out.push_str(s);
        }
        Text::from_string(out)
    }

    /// Resolve an index token to the byte span it addresses.
    ///
    /// A single index covers the one codepoint starting at that offset. For a
    /// slice, the start must begin a codepoint and the end must close one.
    fn span(&self, idx: &str) -> Result<(usize, usize), Error> {
        let s = self.as_str();
        let index = parse_list_index(idx, s.len())?;
        let (i, j) = index.bounds();
        // Also rejects `i == s.len()`, where there is nothing to decode.
        let first = s
            .get(i..)
            .and_then(|rest| rest.chars().next())
            .ok_or(Error::BadIndex(IndexFault::NotBoundary))?;
        match index {
            ListIndex::Single(_) => Ok((i, i + first.len_utf8())),
            ListIndex::Slice(..) => {
                let closes = s.get(..j).is_some_and(|head| head.chars().next_back().is_some());
                if !closes {
                    return Err(Error::BadIndex(IndexFault::NotBoundary));
                }
                Ok((i, j))
            }
        }
    }

    /// Iterate over the codepoints, each as its own `Text`.
    pub fn codepoints(&self) -> impl Iterator<Item = Text> + '_ {
        self.as_str()
            .char_indices()
            .map(move |(i, c)| Text::from_str(&self.as_str()[i..i + c.len_utf8()]))
    }
}

impl Indexable for Text {
    fn len(&self) -> usize {
        self.char_count()
    }

    fn index_one(&self, idx: &Value) -> Result<Value, Error> {
        let (i, j) = self.span(&idx.to_text_string())?;
        Ok(Value::Str(Text::from_str(&self.as_str()[i..j])))
    }

    fn assoc(&self, idx: &Value, replacement: Value) -> Result<Value, Error> {
        let (i, j) = self.span(&idx.to_text_string())?;
        let Value::Str(repl) = replacement else {
            return Err(Error::ReplacementMustBeText);
        };
        let s = self.as_str();
        Ok(Value::Str(Text::concat_many(&[&s[..i], repl.as_str(), &s[j..]])))
    }

    fn iterate(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        Box::new(self.codepoints().map(Value::Str))
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Text::Heap { data: a, .. }, Text::Heap { data: b, .. }) => Arc::ptr_eq(a, b) || a == b,
            (Text::Inline { len: l1, buf: b1 }, Text::Inline { len: l2, buf: b2 }) => {
                l1 == l2 && b1[..*l1 as usize] == b2[..*l2 as usize]
            }
            _ => self.as_str() == other.as_str(),
        }
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().as_bytes().hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::from_str(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_string(value)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}
