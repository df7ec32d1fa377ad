//! Core value types.
//!
//! - `Value` - The runtime value representation
//! - `Text` - Immutable string, indexable by codepoint
//! - `List` - Immutable list of values
//! - `Indexable` - Indexed read and functional update shared by sequences

pub mod list;
pub mod text;
pub mod value;

pub use list::List;
pub use text::Text;
pub use value::*;
