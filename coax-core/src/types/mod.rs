//! Core type definitions for coax.

mod error;
mod kind;
mod options;
mod value;

pub use error::{CoerceError, ErrorKind};
pub use kind::{Kind, TargetKind};
pub use options::{Fallback, Flag, Opt, Options};
pub use value::{BoxError, Dynamic, MarshalText, Ptr, Value};
