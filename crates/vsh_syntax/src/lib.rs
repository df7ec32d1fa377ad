//! Text-level contracts of the vsh language: index grammar, variable
//! reference grammar and literal quoting.
//!
mod index;
mod str_util;
mod util;
mod variable;

pub use index::{IndexError, ListIndex, parse_list_index};
pub use str_util::{quote, unescape, unquote};
pub use util::{is_bareword, is_bareword_char, is_printable};
pub use variable::{FN_PREFIX, VariableRef, parse_variable};
