//! Signed-integer coercion.

use std::num::ParseIntError;

use crate::helpers::parse::parse_int;
use crate::ops::numeric::{self, Numeric};
use crate::types::{CoerceError, Kind, Options, Value};

impl Numeric for isize {
    type ParseError = ParseIntError;

    fn in_family(kind: Kind) -> bool {
        kind.is_signed()
    }

    fn from_value(value: &Value<'_>) -> Option<Self> {
        Some(match *value {
            Value::I8(n) => n as isize,
            Value::I16(n) => n as isize,
            Value::I32(n) => n as isize,
            Value::I64(n) => n as isize,
            Value::Isize(n) => n,
            _ => return None,
        })
    }

    fn parse(text: &str) -> Result<Self, Self::ParseError> {
        parse_int(text)
    }
}

/// Returns true if [`int`] would succeed for `value` under `options`.
pub fn can_int(value: &Value<'_>, options: &Options) -> bool {
    numeric::can_coerce::<isize>(value, options)
}

/// Coerce `value` into a signed integer.
///
/// Supported inputs, in resolution order:
/// - `i8`, `i16`, `i32`, `i64`, `isize`, and typed pointers to them
/// - nil, which yields the fallback (or `0`)
/// - unless reflection is disabled, anything whose underlying representation
///   is a signed integer
/// - with string conversion enabled, anything [`string`](crate::string)
///   supports, parsed as a base-10 integer
///
/// Wider values are truncated to `isize`, never range-checked.
pub fn int(value: &Value<'_>, options: &Options) -> Result<isize, CoerceError> {
    numeric::coerce::<isize>(value, options)
}
