//! The engine shared by the integer, unsigned-integer and float coercions.
//!
//! Predicate and conversion both start from [`plan`], so they cannot drift
//! apart: a plan is either a direct result, an absent value (fallback), text
//! to parse, or unsupported.

use crate::ops::string;
use crate::ops::target::{fallback, Target};
use crate::types::{CoerceError, Kind, Options, Value};

pub(crate) trait Numeric: Target + Copy {
    type ParseError: std::error::Error + Send + Sync + 'static;

    /// True for the built-in kinds of this family.
    fn in_family(kind: Kind) -> bool;

    /// Convert a built-in value of this family to the canonical width.
    fn from_value(value: &Value<'_>) -> Option<Self>;

    fn parse(text: &str) -> Result<Self, Self::ParseError>;
}

enum Plan<'a, T> {
    Direct(T),
    Absent,
    Text(string::Plan<'a>),
    Unsupported,
}

fn plan<'a, T: Numeric>(value: &Value<'a>, options: &Options) -> Plan<'a, T> {
    if let Some(n) = T::from_value(value) {
        return Plan::Direct(n);
    }

    match value {
        Value::Ptr(ptr) if T::in_family(ptr.elem()) => {
            log::trace!("Dereferencing {} for {}", value.type_name(), T::KIND);
            return match ptr.target().and_then(T::from_value) {
                Some(n) => Plan::Direct(n),
                None => Plan::Absent,
            };
        }
        Value::Nil => return Plan::Absent,
        _ => {}
    }

    if options.uses_reflection() {
        match value.underlying() {
            None => return Plan::Absent,
            Some(inner) => {
                if let Some(n) = T::from_value(&inner) {
                    log::trace!(
                        "Resolved {} through its underlying {}",
                        value.type_name(),
                        inner.kind()
                    );
                    return Plan::Direct(n);
                }
            }
        }
    }

    if options.converts_strings() {
        let text = string::plan(value, &options.for_text());
        if text.is_supported() {
            return Plan::Text(text);
        }
    }

    Plan::Unsupported
}

/// Render and parse a textual value. `Ok(None)` means the text was absent or
/// empty and the fallback applies.
fn parse_text<T: Numeric>(
    value: &Value<'_>,
    text: string::Plan<'_>,
) -> Result<Option<T>, CoerceError> {
    let text = match text.render(value, T::KIND)? {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };
    log::trace!("Parsing {:?} as {}", text, T::KIND);
    T::parse(&text)
        .map(Some)
        .map_err(|err| CoerceError::invalid_with_cause(value, T::KIND, err))
}

pub(crate) fn can_coerce<T: Numeric>(value: &Value<'_>, options: &Options) -> bool {
    match plan::<T>(value, options) {
        Plan::Direct(_) | Plan::Absent => true,
        Plan::Text(text) => !options.checks_marshaler() || parse_text::<T>(value, text).is_ok(),
        Plan::Unsupported => false,
    }
}

pub(crate) fn coerce<T: Numeric>(value: &Value<'_>, options: &Options) -> Result<T, CoerceError> {
    match plan::<T>(value, options) {
        Plan::Direct(n) => Ok(n),
        Plan::Absent => fallback::<T>(options),
        Plan::Text(text) => match parse_text::<T>(value, text)? {
            Some(n) => Ok(n),
            None => fallback::<T>(options),
        },
        Plan::Unsupported => Err(CoerceError::invalid(value, T::KIND)),
    }
}
