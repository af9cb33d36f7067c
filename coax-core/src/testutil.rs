//! Named types shared by the unit tests.

use std::error::Error;
use std::fmt;

use crate::types::{BoxError, Dynamic, MarshalText, Value};

/// A named signed integer.
pub struct MyInt(pub i64);

impl Dynamic for MyInt {
    fn type_name(&self) -> &str {
        "MyInt"
    }

    fn underlying(&self) -> Value<'_> {
        Value::I64(self.0)
    }
}

pub struct MyUint(pub u64);

impl Dynamic for MyUint {
    fn type_name(&self) -> &str {
        "MyUint"
    }

    fn underlying(&self) -> Value<'_> {
        Value::U64(self.0)
    }
}

pub struct MyFloat(pub f64);

impl Dynamic for MyFloat {
    fn type_name(&self) -> &str {
        "MyFloat"
    }

    fn underlying(&self) -> Value<'_> {
        Value::F64(self.0)
    }
}

/// A named string with no capabilities.
pub struct MyString(pub String);

impl Dynamic for MyString {
    fn type_name(&self) -> &str {
        "MyString"
    }

    fn underlying(&self) -> Value<'_> {
        Value::Str(&self.0)
    }
}

/// A named byte sequence; `None` is nil.
pub struct MyBytes(pub Option<Vec<u8>>);

impl Dynamic for MyBytes {
    fn type_name(&self) -> &str {
        "MyBytes"
    }

    fn underlying(&self) -> Value<'_> {
        Value::Bytes(self.0.as_deref())
    }
}

/// A named char sequence; `None` is nil.
pub struct MyRunes(pub Option<Vec<char>>);

impl Dynamic for MyRunes {
    fn type_name(&self) -> &str {
        "MyRunes"
    }

    fn underlying(&self) -> Value<'_> {
        Value::Chars(self.0.as_deref())
    }
}

/// Displays as its text upper-cased, followed by `!`.
pub struct Shout(pub &'static str);

impl fmt::Display for Shout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!", self.0.to_uppercase())
    }
}

impl Dynamic for Shout {
    fn type_name(&self) -> &str {
        "Shout"
    }

    fn underlying(&self) -> Value<'_> {
        Value::Str(self.0)
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(self)
    }
}

#[derive(Debug)]
pub struct MarshalFailure;

impl fmt::Display for MarshalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("marshal failure")
    }
}

impl Error for MarshalFailure {}

/// Marshals to `42`, or fails.
#[derive(Debug)]
pub struct Answer {
    err: bool,
}

impl Answer {
    pub fn ok() -> Self {
        Self { err: false }
    }

    pub fn failing() -> Self {
        Self { err: true }
    }
}

impl MarshalText for Answer {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        if self.err {
            return Err(Box::new(MarshalFailure));
        }
        Ok(b"42".to_vec())
    }
}

impl Dynamic for Answer {
    fn type_name(&self) -> &str {
        "Answer"
    }

    fn underlying(&self) -> Value<'_> {
        Value::other(self)
    }

    fn as_marshaler(&self) -> Option<&dyn MarshalText> {
        Some(self)
    }
}
