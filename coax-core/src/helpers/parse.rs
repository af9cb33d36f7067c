//! Text parsers used by the numeric coercions.
//!
//! Input is taken as-is: no trimming, no locale handling, no digit
//! separators.

use std::num::{ParseFloatError, ParseIntError};

/// Errors from [`parse_float`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FloatParseError {
    #[error(transparent)]
    Syntax(#[from] ParseFloatError),

    #[error("invalid hexadecimal float literal")]
    Hex,

    /// The literal is well-formed but does not fit in an `f64`.
    #[error("value out of range")]
    OutOfRange,
}

/// Parse a base-10 signed integer. A leading `+` or `-` is accepted.
pub fn parse_int(text: &str) -> Result<isize, ParseIntError> {
    text.parse()
}

/// Parse a base-10 unsigned integer.
pub fn parse_uint(text: &str) -> Result<usize, ParseIntError> {
    text.parse()
}

/// Parse a float.
///
/// Accepts decimal or exponent notation, `inf`, `infinity` and `nan` in any
/// case, and hexadecimal literals with a binary exponent (`0x1.8p3`). A
/// literal too large for an `f64` is an [`OutOfRange`] error rather than an
/// infinity; one too small rounds to zero.
///
/// [`OutOfRange`]: FloatParseError::OutOfRange
pub fn parse_float(text: &str) -> Result<f64, FloatParseError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = match unsigned.get(..2) {
        Some("0x" | "0X") => {
            let magnitude = parse_hex_float(&unsigned[2..]).ok_or(FloatParseError::Hex)?;
            if negative {
                -magnitude
            } else {
                magnitude
            }
        }
        _ => {
            let value: f64 = text.parse()?;
            let lower = unsigned.to_ascii_lowercase();
            if lower == "inf" || lower == "infinity" {
                return Ok(value);
            }
            value
        }
    };

    if value.is_infinite() {
        return Err(FloatParseError::OutOfRange);
    }
    Ok(value)
}

/// Hex digits with an optional point, then a mandatory `p` exponent.
fn parse_hex_float(text: &str) -> Option<f64> {
    let (digits, exponent) = text.split_once(|c: char| c == 'p' || c == 'P')?;
    let mut scale: i64 = exponent.parse().ok()?;
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let whole = whole.chars().map(|c| (c, false));
    let fraction = fraction.chars().map(|c| (c, true));
    let mut mantissa = 0u64;
    for (c, fractional) in whole.chain(fraction) {
        let digit = u64::from(c.to_digit(16)?);
        if mantissa >> 60 == 0 {
            mantissa = (mantissa << 4) | digit;
            if fractional {
                scale -= 4;
            }
        } else if !fractional {
            // Digits past 64 bits only shift the value.
            scale += 4;
        }
    }

    Some(scale_by_pow2(mantissa as f64, scale))
}

fn scale_by_pow2(mut value: f64, mut exp: i64) -> f64 {
    while exp != 0 && value != 0.0 && value.is_finite() {
        let step = exp.clamp(-1000, 1000);
        value *= 2f64.powi(step as i32);
        exp -= step;
    }
    value
}
