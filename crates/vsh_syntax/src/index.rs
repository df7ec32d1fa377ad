//! Index grammar shared by every indexable value.
//!
//! An index is either a single integer (`3`, `-1`) or a colon-separated pair
//! (`1:3`, `:2`, `-2:`). Negative numbers count from the end.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListIndex {
    Single(usize),
    /// Half-open range `[start, end)`.
    Slice(usize, usize),
}

impl ListIndex {
    pub fn is_slice(&self) -> bool {
        matches!(self, ListIndex::Slice(..))
    }

    /// Start and end of the addressed span. A single index covers one unit.
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            ListIndex::Single(i) => (i, i + 1),
            ListIndex::Slice(i, j) => (i, j),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexError {
    NotInteger,
    OutOfRange,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::NotInteger => write!(f, "index must be integer"),
            IndexError::OutOfRange => write!(f, "index out of range"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Parse `text` as an index into a sequence of length `n` and normalize it.
pub fn parse_list_index(text: &str, n: usize) -> Result<ListIndex, IndexError> {
    let n = i64::try_from(n).map_err(|_| IndexError::OutOfRange)?;
    let fix = |i: i64| if i < 0 { i + n } else { i };

    let Some(colon) = text.find(':') else {
        let i = fix(parse_int(text)?);
        if !(0 <= i && i < n) {
            return Err(IndexError::OutOfRange);
        }
        return Ok(ListIndex::Single(i as usize));
    };

    let (lo, hi) = (&text[..colon], &text[colon + 1..]);
    let i = if lo.is_empty() { 0 } else { fix(parse_int(lo)?) };
    let j = if hi.is_empty() { n } else { fix(parse_int(hi)?) };
    if !(0 <= i && i <= j && j <= n) {
        return Err(IndexError::OutOfRange);
    }
    Ok(ListIndex::Slice(i as usize, j as usize))
}

fn parse_int(s: &str) -> Result<i64, IndexError> {
    s.parse::<i64>().map_err(|_| IndexError::NotInteger)
}
