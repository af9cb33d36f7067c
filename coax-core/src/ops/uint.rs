//! Unsigned-integer coercion.

use std::num::ParseIntError;

use crate::helpers::parse::parse_uint;
use crate::ops::numeric::{self, Numeric};
use crate::types::{CoerceError, Kind, Options, Value};

impl Numeric for usize {
    type ParseError = ParseIntError;

    fn in_family(kind: Kind) -> bool {
        kind.is_unsigned()
    }

    fn from_value(value: &Value<'_>) -> Option<Self> {
        Some(match *value {
            Value::U8(n) => n as usize,
            Value::U16(n) => n as usize,
            Value::U32(n) => n as usize,
            Value::U64(n) => n as usize,
            Value::Usize(n) => n,
            _ => return None,
        })
    }

    fn parse(text: &str) -> Result<Self, Self::ParseError> {
        parse_uint(text)
    }
}

/// Returns true if [`uint`] would succeed for `value` under `options`.
pub fn can_uint(value: &Value<'_>, options: &Options) -> bool {
    numeric::can_coerce::<usize>(value, options)
}

/// Coerce `value` into an unsigned integer.
///
/// Mirrors [`int`](crate::int) for `u8`, `u16`, `u32`, `u64` and `usize`.
/// Parse failures carry the parse error as their cause, like every other
/// coercion.
pub fn uint(value: &Value<'_>, options: &Options) -> Result<usize, CoerceError> {
    numeric::coerce::<usize>(value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MyBytes, MyInt, MyUint};

    fn opts() -> Options {
        Options::new()
    }

    #[test]
    fn exact_types_and_pointers() {
        assert_eq!(uint(&Value::from(42u8), &opts()).unwrap(), 42);
        assert_eq!(uint(&Value::from(42u16), &opts()).unwrap(), 42);
        assert_eq!(uint(&Value::from(42u32), &opts()).unwrap(), 42);
        assert_eq!(uint(&Value::from(42u64), &opts()).unwrap(), 42);
        assert_eq!(uint(&Value::from(42usize), &opts()).unwrap(), 42);

        let n = 7u32;
        assert_eq!(uint(&Value::from(Some(&n)), &opts()).unwrap(), 7);
        assert_eq!(uint(&Value::from(None::<&u64>), &opts()).unwrap(), 0);
    }

    #[test]
    fn signed_values_are_rejected() {
        assert!(!can_uint(&Value::from(1i32), &opts()));
        assert!(uint(&Value::from(1i32), &opts()).is_err());
        let my = MyInt(1);
        assert!(uint(&Value::named(&my), &opts()).is_err());
    }

    #[test]
    fn named_types() {
        let my = MyUint(9);
        assert_eq!(uint(&Value::named(&my), &opts()).unwrap(), 9);
        let strict = opts().without_reflection();
        assert!(uint(&Value::named(&my), &strict).is_err());
    }

    #[test]
    fn parse_failures_keep_their_cause() {
        let convert = opts().convert_strings();
        let err = uint(&Value::from("-1"), &convert).unwrap_err();
        let cause = err.cause().unwrap();
        assert!(cause.downcast_ref::<ParseIntError>().is_some());
        assert!(!can_uint(&Value::from("-1"), &convert));
        assert_eq!(uint(&Value::from("18"), &convert).unwrap(), 18);
    }

    #[test]
    fn fallback() {
        let options = opts().with_fallback(3usize);
        assert_eq!(uint(&Value::Nil, &options).unwrap(), 3);
        let nil_bytes = MyBytes(None);
        let convert = options.clone().convert_strings();
        assert_eq!(uint(&Value::named(&nil_bytes), &convert).unwrap(), 3);

        let wrong = opts().with_fallback(3isize);
        let err = uint(&Value::Nil, &wrong).unwrap_err();
        assert!(err.to_string().contains("usize"));
    }
}
