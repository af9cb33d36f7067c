//! Floating-point coercion.

use crate::helpers::parse::{parse_float, FloatParseError};
use crate::ops::numeric::{self, Numeric};
use crate::types::{CoerceError, Kind, Options, Value};

impl Numeric for f64 {
    type ParseError = FloatParseError;

    fn in_family(kind: Kind) -> bool {
        kind.is_float()
    }

    fn from_value(value: &Value<'_>) -> Option<Self> {
        match *value {
            Value::F32(n) => Some(f64::from(n)),
            Value::F64(n) => Some(n),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Self, Self::ParseError> {
        parse_float(text)
    }
}

/// Returns true if [`float`] would succeed for `value` under `options`.
pub fn can_float(value: &Value<'_>, options: &Options) -> bool {
    numeric::can_coerce::<f64>(value, options)
}

/// Coerce `value` into an `f64`.
///
/// Accepts `f32` (widened exactly), `f64`, typed pointers to either, named
/// types built on them, nil, and with string conversion enabled any textual
/// value in Rust float syntax.
pub fn float(value: &Value<'_>, options: &Options) -> Result<f64, CoerceError> {
    numeric::coerce::<f64>(value, options)
}
