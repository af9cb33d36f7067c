//! Low-level helpers.

pub mod parse;
#[cfg(feature = "toml-config")]
pub mod policy;
pub mod ptr;
