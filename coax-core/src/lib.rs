//! coax core library
//!
//! Runtime coercion of dynamically-typed values into integers, unsigned
//! integers, floats and strings, with one consistent policy for nil inputs,
//! pointers, named types, text conversion and fallbacks.
//!
//! # Architecture
//!
//! - `types`: Core data types (Value, Options, CoerceError, TargetKind)
//! - `ops`: Coercions (int, uint, float, string), their predicates and the
//!   panic/recover adapters
//! - `helpers`: Low-level utilities (pointer helpers, parsers, policy files)
//!
//! # Example
//!
//! ```
//! use coax_core::{can_int, int, Options, Value};
//!
//! let options = Options::new().convert_strings();
//! assert!(can_int(&Value::from("42"), &options));
//! assert_eq!(int(&Value::from("42"), &options).unwrap(), 42);
//! assert_eq!(int(&Value::Nil, &options.with_fallback(-1isize)).unwrap(), -1);
//! ```

pub mod helpers;
pub mod ops;
pub mod types;

#[cfg(test)]
mod testutil;

// Re-export commonly used types at crate root
pub use types::{
    BoxError, CoerceError, Dynamic, ErrorKind, Fallback, Flag, Kind, MarshalText, Opt, Options,
    Ptr, TargetKind, Value,
};

// Re-export operations at crate root
pub use ops::{can_float, can_int, can_string, can_uint, float, int, string, uint};
pub use ops::{maybe, must, try_catch};

// Re-export pointer helpers
pub use helpers::ptr::{ptr, value, value_or};
