//! The dynamic value model.
//!
//! A [`Value`] stands in for "anything a caller might hand us": a built-in
//! scalar, a string or byte sequence, a typed pointer that may be nil, or a
//! user-defined type that describes itself through [`Dynamic`].
//!
//! Values borrow their payload, so building one is cheap:
//!
//! ```
//! use coax_core::Value;
//!
//! let n = 42i32;
//! let values = [
//!     Value::from(n),
//!     Value::from("42"),
//!     Value::from(b"42"),
//!     Value::from(Some(&n)),
//!     Value::from(None::<&i32>),
//! ];
//! assert_eq!(values[3].type_name(), "*i32");
//! ```

use std::fmt;

use super::kind::Kind;

/// Boxed error type returned by fallible capabilities.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A value that renders itself as text and may fail doing so.
pub trait MarshalText {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError>;
}

/// A user-defined type that takes part in coercion.
///
/// `underlying` exposes the representation the type is built on; it is only
/// consulted when reflection is enabled. The two capability hooks are checked
/// before reflection, marshaler first.
///
/// ```
/// use coax_core::{Dynamic, Options, Value};
///
/// struct Celsius(f64);
///
/// impl Dynamic for Celsius {
///     fn type_name(&self) -> &str {
///         "Celsius"
///     }
///
///     fn underlying(&self) -> Value<'_> {
///         Value::F64(self.0)
///     }
/// }
///
/// let temp = Celsius(21.5);
/// let value = Value::named(&temp);
/// assert_eq!(coax_core::float(&value, &Options::new()).unwrap(), 21.5);
/// assert!(coax_core::float(&value, &Options::new().without_reflection()).is_err());
/// ```
pub trait Dynamic {
    /// Declared type name, used in error messages.
    fn type_name(&self) -> &str;

    /// The representation this type is derived from.
    fn underlying(&self) -> Value<'_>;

    /// Fallible text rendering.
    fn as_marshaler(&self) -> Option<&dyn MarshalText> {
        None
    }

    /// Infallible text rendering.
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }
}

/// A dynamically-typed input.
#[derive(Clone)]
pub enum Value<'a> {
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
    /// A byte sequence; `None` is a nil sequence.
    Bytes(Option<&'a [u8]>),
    /// A character sequence; `None` is a nil sequence.
    Chars(Option<&'a [char]>),
    Ptr(Ptr<'a>),
    Named(&'a dyn Dynamic),
    /// Anything else. Never coercible; kept so errors can describe it.
    Other {
        type_name: &'static str,
        repr: &'a dyn fmt::Debug,
    },
}

/// A typed pointer. Remembers its pointee kind when nil.
#[derive(Clone)]
pub struct Ptr<'a> {
    elem: Kind,
    target: Option<Box<Value<'a>>>,
}

impl<'a> Ptr<'a> {
    /// Point at `target`.
    pub fn to(target: Value<'a>) -> Self {
        Self {
            elem: target.kind(),
            target: Some(Box::new(target)),
        }
    }

    /// A nil pointer to a value of kind `elem`.
    pub fn null(elem: Kind) -> Self {
        Self { elem, target: None }
    }

    pub fn elem(&self) -> Kind {
        self.elem
    }

    pub fn target(&self) -> Option<&Value<'a>> {
        self.target.as_deref()
    }

    pub fn is_nil(&self) -> bool {
        self.target.is_none()
    }
}

impl<'a> Value<'a> {
    /// Wrap a user-defined type.
    pub fn named<T: Dynamic>(value: &'a T) -> Self {
        Value::Named(value)
    }

    /// Wrap an arbitrary value that no coercion supports.
    pub fn other<T: fmt::Debug>(value: &'a T) -> Self {
        Value::Other {
            type_name: std::any::type_name::<T>(),
            repr: value,
        }
    }

    /// A non-nil pointer to `target`.
    pub fn ptr(target: Value<'a>) -> Self {
        Value::Ptr(Ptr::to(target))
    }

    /// A nil pointer to a value of kind `elem`.
    pub fn null_ptr(elem: Kind) -> Self {
        Value::Ptr(Ptr::null(elem))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Isize(_) => Kind::Isize,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::Usize(_) => Kind::Usize,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
            Value::Bytes(_) => Kind::Bytes,
            Value::Chars(_) => Kind::Chars,
            Value::Ptr(_) => Kind::Ptr,
            Value::Named(_) => Kind::Named,
            Value::Other { .. } => Kind::Other,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Declared type of this value, e.g. `i32`, `*&str` or a named type.
    pub fn type_name(&self) -> String {
        match self {
            Value::Ptr(ptr) => match ptr.target() {
                Some(target) => format!("*{}", target.type_name()),
                None => format!("*{}", ptr.elem()),
            },
            Value::Named(dynamic) => dynamic.type_name().to_string(),
            Value::Other { type_name, .. } => (*type_name).to_string(),
            other => other.kind().name().to_string(),
        }
    }

    /// Follow pointers and named types down to a built-in representation.
    ///
    /// Returns `None` if a nil pointer (or nil) is reached on the way.
    pub fn underlying(&self) -> Option<Value<'a>> {
        let mut current = self.clone();
        loop {
            current = match current {
                Value::Nil => return None,
                Value::Ptr(ptr) => *ptr.target?,
                Value::Named(dynamic) => dynamic.underlying(),
                other => return Some(other),
            };
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::I8(n) => write!(f, "{n}"),
            Value::I16(n) => write!(f, "{n}"),
            Value::I32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::Isize(n) => write!(f, "{n}"),
            Value::U8(n) => write!(f, "{n}"),
            Value::U16(n) => write!(f, "{n}"),
            Value::U32(n) => write!(f, "{n}"),
            Value::U64(n) => write!(f, "{n}"),
            Value::Usize(n) => write!(f, "{n}"),
            Value::F32(n) => write!(f, "{n}"),
            Value::F64(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Bytes(bytes) => write!(f, "{:?}", bytes.unwrap_or_default()),
            Value::Chars(chars) => write!(f, "{:?}", chars.unwrap_or_default()),
            Value::Ptr(ptr) => match ptr.target() {
                Some(target) => write!(f, "&{target}"),
                None => f.write_str("<nil>"),
            },
            Value::Named(dynamic) => match dynamic.as_display() {
                Some(display) => write!(f, "{display}"),
                None => write!(f, "{}", dynamic.underlying()),
            },
            Value::Other { repr, .. } => write!(f, "{repr:?}"),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self)
    }
}

// =============================================================================
// Conversions from built-in types
// =============================================================================

macro_rules! impl_from_scalar {
    ($($t:ty => $variant:ident, $kind:ident;)*) => {$(
        impl From<$t> for Value<'_> {
            fn from(v: $t) -> Self {
                Value::$variant(v)
            }
        }

        impl<'a> From<Option<&'a $t>> for Value<'a> {
            fn from(p: Option<&'a $t>) -> Self {
                match p {
                    Some(v) => Value::ptr(Value::$variant(*v)),
                    None => Value::null_ptr(Kind::$kind),
                }
            }
        }
    )*};
}

impl_from_scalar! {
    bool => Bool, Bool;
    i8 => I8, I8;
    i16 => I16, I16;
    i32 => I32, I32;
    i64 => I64, I64;
    isize => Isize, Isize;
    u8 => U8, U8;
    u16 => U16, U16;
    u32 => U32, U32;
    u64 => U64, U64;
    usize => Usize, Usize;
    f32 => F32, F32;
    f64 => F64, F64;
    char => Char, Char;
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(p: Option<&'a str>) -> Self {
        match p {
            Some(s) => Value::ptr(Value::Str(s)),
            None => Value::null_ptr(Kind::Str),
        }
    }
}

impl<'a> From<Option<&'a String>> for Value<'a> {
    fn from(p: Option<&'a String>) -> Self {
        Value::from(p.map(String::as_str))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Bytes(Some(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Value::Bytes(Some(bytes.as_slice()))
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Value::Bytes(Some(bytes.as_slice()))
    }
}

impl<'a> From<&'a [char]> for Value<'a> {
    fn from(chars: &'a [char]) -> Self {
        Value::Chars(Some(chars))
    }
}

impl<'a> From<&'a Vec<char>> for Value<'a> {
    fn from(chars: &'a Vec<char>) -> Self {
        Value::Chars(Some(chars.as_slice()))
    }
}

impl<'a> From<&'a dyn Dynamic> for Value<'a> {
    fn from(dynamic: &'a dyn Dynamic) -> Self {
        Value::Named(dynamic)
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}
