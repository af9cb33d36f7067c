//! Coercion options.
//!
//! [`Options`] is an immutable record: three behavior flags and an optional,
//! typed fallback. It can be built with the chained constructors or collected
//! from a list of [`Opt`] tokens.
//!
//! ```
//! use coax_core::{Fallback, Opt, Options};
//!
//! let chained = Options::new().convert_strings().with_fallback(42isize);
//! let collected: Options = [Opt::ConvertStrings, Opt::Fallback(Fallback::Int(42))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(chained, collected);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::kind::TargetKind;

/// A behavior flag, for membership tests with [`Options::has`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Parse string-like inputs into numbers.
    ConvertStrings,
    /// Ignore the underlying representation of named types and pointer chains.
    SkipReflection,
    /// Exercise fallible capabilities inside `can_*` predicates.
    MarshalerCheck,
}

/// Result substituted when the input is nil.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fallback {
    Int(isize),
    Uint(usize),
    Float(f64),
    String(String),
}

impl Fallback {
    /// The only target kind this fallback is valid for.
    pub fn kind(&self) -> TargetKind {
        match self {
            Fallback::Int(_) => TargetKind::Int,
            Fallback::Uint(_) => TargetKind::Uint,
            Fallback::Float(_) => TargetKind::Float,
            Fallback::String(_) => TargetKind::String,
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Int(n) => write!(f, "{n}"),
            Fallback::Uint(n) => write!(f, "{n}"),
            Fallback::Float(n) => write!(f, "{n}"),
            Fallback::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<isize> for Fallback {
    fn from(n: isize) -> Self {
        Fallback::Int(n)
    }
}

impl From<usize> for Fallback {
    fn from(n: usize) -> Self {
        Fallback::Uint(n)
    }
}

impl From<f64> for Fallback {
    fn from(n: f64) -> Self {
        Fallback::Float(n)
    }
}

impl From<String> for Fallback {
    fn from(s: String) -> Self {
        Fallback::String(s)
    }
}

impl From<&str> for Fallback {
    fn from(s: &str) -> Self {
        Fallback::String(s.to_string())
    }
}

/// A single option token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Opt {
    ConvertStrings,
    SkipReflection,
    MarshalerCheck,
    NoMarshalerCheck,
    Fallback(Fallback),
}

/// Coercion options.
///
/// The default converts no strings, uses reflection and verifies fallible
/// capabilities in predicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    convert_strings: bool,
    reflection: bool,
    marshaler_check: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    fallback: Option<Fallback>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            convert_strings: false,
            reflection: true,
            marshaler_check: true,
            fallback: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permit parsing string-like inputs into numeric results.
    pub fn convert_strings(mut self) -> Self {
        self.convert_strings = true;
        self
    }

    /// Disable the structural path: named types and pointer chains are no
    /// longer resolved through their underlying representation.
    pub fn without_reflection(mut self) -> Self {
        self.reflection = false;
        self
    }

    /// Run marshalers and parsers inside `can_*` predicates. On by default.
    pub fn with_marshaler_check(mut self) -> Self {
        self.marshaler_check = true;
        self
    }

    /// Answer `can_*` predicates from type shape alone.
    pub fn without_marshaler_check(mut self) -> Self {
        self.marshaler_check = false;
        self
    }

    /// Substitute `fallback` when the input is nil.
    pub fn with_fallback(mut self, fallback: impl Into<Fallback>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Membership test for behavior flags.
    pub fn has(&self, flag: Flag) -> bool {
        match flag {
            Flag::ConvertStrings => self.convert_strings,
            Flag::SkipReflection => !self.reflection,
            Flag::MarshalerCheck => self.marshaler_check,
        }
    }

    pub fn converts_strings(&self) -> bool {
        self.convert_strings
    }

    pub fn uses_reflection(&self) -> bool {
        self.reflection
    }

    pub fn checks_marshaler(&self) -> bool {
        self.marshaler_check
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// Options for rendering a value as text on behalf of a numeric coercion:
    /// same reflection and verification policy, no fallback.
    pub(crate) fn for_text(&self) -> Options {
        Options {
            convert_strings: false,
            reflection: self.reflection,
            marshaler_check: self.marshaler_check,
            fallback: None,
        }
    }
}

/// Collects tokens as a set: duplicates have no effect, the first fallback
/// wins and `NoMarshalerCheck` beats `MarshalerCheck`.
impl FromIterator<Opt> for Options {
    fn from_iter<I: IntoIterator<Item = Opt>>(iter: I) -> Self {
        let mut options = Options::default();
        let mut skip_check = false;
        for opt in iter {
            match opt {
                Opt::ConvertStrings => options.convert_strings = true,
                Opt::SkipReflection => options.reflection = false,
                Opt::MarshalerCheck => {}
                Opt::NoMarshalerCheck => skip_check = true,
                Opt::Fallback(fallback) => {
                    if options.fallback.is_none() {
                        options.fallback = Some(fallback);
                    }
                }
            }
        }
        options.marshaler_check = !skip_check;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_verify_and_reflect() {
        let options = Options::new();
        assert!(!options.has(Flag::ConvertStrings));
        assert!(!options.has(Flag::SkipReflection));
        assert!(options.has(Flag::MarshalerCheck));
        assert!(options.fallback().is_none());
    }

    #[test]
    fn tokens_behave_like_a_set() {
        let options: Options = vec![
            Opt::ConvertStrings,
            Opt::ConvertStrings,
            Opt::Fallback(Fallback::Int(1)),
            Opt::Fallback(Fallback::Int(2)),
            Opt::NoMarshalerCheck,
            Opt::MarshalerCheck,
        ]
        .into_iter()
        .collect();

        assert!(options.has(Flag::ConvertStrings));
        assert!(!options.has(Flag::MarshalerCheck));
        assert_eq!(options.fallback(), Some(&Fallback::Int(1)));
    }

    #[test]
    fn text_options_drop_fallback_and_conversion() {
        let options = Options::new()
            .convert_strings()
            .without_reflection()
            .without_marshaler_check()
            .with_fallback(7isize);
        let text = options.for_text();
        assert!(!text.converts_strings());
        assert!(!text.uses_reflection());
        assert!(!text.checks_marshaler());
        assert!(text.fallback().is_none());
    }

    #[test]
    fn fallback_kinds() {
        assert_eq!(Fallback::from(1isize).kind(), TargetKind::Int);
        assert_eq!(Fallback::from(1usize).kind(), TargetKind::Uint);
        assert_eq!(Fallback::from(1.5).kind(), TargetKind::Float);
        assert_eq!(Fallback::from("x").kind(), TargetKind::String);
        assert_eq!(Fallback::from("x").to_string(), "\"x\"");
    }
}
