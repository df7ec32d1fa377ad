pub(super) mod core;
pub(super) mod conversion;
pub(super) mod common;

pub use self::core::*;
pub use self::conversion::*;
