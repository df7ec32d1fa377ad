//! Utility modules.

mod capabilities;

pub use capabilities::{Capabilities, Environ, MapEnviron, ProcessEnviron, ProcessSpawner, StdSpawner};
