//! String coercion.
//!
//! Also the text front-end of the numeric coercions: when string conversion
//! is enabled they ask [`plan`] whether a value is textual and render it
//! through [`Plan::render`].

use std::borrow::Cow;
use std::fmt;

use crate::ops::target::fallback;
use crate::types::{CoerceError, Dynamic, MarshalText, Options, TargetKind, Value};

/// How a value becomes text, decided from its shape alone.
pub(crate) enum Plan<'a> {
    /// Rendered without running any capability.
    Text(Cow<'a, str>),
    /// Infallible `Display` capability.
    Render(&'a dyn fmt::Display),
    /// Fallible marshaler capability.
    Marshal(&'a dyn MarshalText),
    /// Nil, a nil typed pointer, or a nil sequence reached through reflection.
    Absent,
    Unsupported,
}

pub(crate) fn plan<'a>(value: &Value<'a>, options: &Options) -> Plan<'a> {
    match value {
        Value::Str(s) => return Plan::Text(Cow::Borrowed(*s)),
        Value::Bytes(bytes) => {
            return Plan::Text(String::from_utf8_lossy(bytes.unwrap_or_default()));
        }
        Value::Char(c) => return Plan::Text(Cow::Owned(c.to_string())),
        Value::Chars(chars) => {
            return Plan::Text(Cow::Owned(chars.unwrap_or_default().iter().collect()));
        }
        Value::Ptr(ptr) if ptr.elem().is_scalar_text() => {
            return match ptr.target() {
                Some(target) => plan(target, options),
                None => Plan::Absent,
            };
        }
        Value::Named(dynamic) => {
            if let Some(plan) = capability(*dynamic) {
                return plan;
            }
        }
        Value::Ptr(ptr) => {
            // A pointer to a named type carries the same capabilities.
            if let Some(Value::Named(dynamic)) = ptr.target() {
                if let Some(plan) = capability(*dynamic) {
                    return plan;
                }
            }
        }
        Value::Nil => return Plan::Absent,
        _ => {}
    }

    if !options.uses_reflection() {
        return Plan::Unsupported;
    }

    match value.underlying() {
        None | Some(Value::Bytes(None)) | Some(Value::Chars(None)) => Plan::Absent,
        Some(Value::Str(s)) => Plan::Text(Cow::Borrowed(s)),
        Some(Value::Bytes(Some(bytes))) => Plan::Text(String::from_utf8_lossy(bytes)),
        Some(Value::Chars(Some(chars))) => Plan::Text(Cow::Owned(chars.iter().collect())),
        Some(_) => Plan::Unsupported,
    }
}

/// Marshaler first, then `Display`.
fn capability<'a>(dynamic: &'a dyn Dynamic) -> Option<Plan<'a>> {
    if let Some(marshaler) = dynamic.as_marshaler() {
        return Some(Plan::Marshal(marshaler));
    }
    dynamic.as_display().map(Plan::Render)
}

impl<'a> Plan<'a> {
    /// Produce the text. `Ok(None)` means the value is absent.
    ///
    /// Failures are reported against `target`, the coercion that asked for
    /// the text.
    pub(crate) fn render(
        self,
        value: &Value<'_>,
        target: TargetKind,
    ) -> Result<Option<Cow<'a, str>>, CoerceError> {
        match self {
            Plan::Text(text) => Ok(Some(text)),
            Plan::Render(display) => Ok(Some(Cow::Owned(display.to_string()))),
            Plan::Marshal(marshaler) => match marshaler.marshal_text() {
                Ok(bytes) => Ok(Some(Cow::Owned(
                    String::from_utf8_lossy(&bytes).into_owned(),
                ))),
                Err(err) => {
                    log::trace!("Marshaler of {} failed: {}", value.type_name(), err);
                    Err(CoerceError::invalid_with_cause(value, target, err))
                }
            },
            Plan::Absent => Ok(None),
            Plan::Unsupported => Err(CoerceError::invalid(value, target)),
        }
    }

    pub(crate) fn is_supported(&self) -> bool {
        !matches!(self, Plan::Unsupported)
    }
}

/// Returns true if [`string`] would succeed for `value` under `options`.
///
/// With marshaler verification on (the default) a marshaler is actually run
/// and must not fail; otherwise its presence is enough.
pub fn can_string(value: &Value<'_>, options: &Options) -> bool {
    match plan(value, options) {
        Plan::Text(_) | Plan::Render(_) | Plan::Absent => true,
        Plan::Marshal(marshaler) => !options.checks_marshaler() || marshaler.marshal_text().is_ok(),
        Plan::Unsupported => false,
    }
}

/// Coerce `value` into a string.
///
/// Supported inputs, in resolution order:
/// - `&str`, byte slices (decoded lossily), `char`, char slices
/// - typed pointers to `&str` or `char`
/// - named types, or pointers to them, with a [`MarshalText`] capability,
///   then with `Display`
/// - nil, which yields the fallback (or `""`)
/// - unless reflection is disabled, anything whose underlying representation
///   is one of the sequences above
pub fn string(value: &Value<'_>, options: &Options) -> Result<String, CoerceError> {
    match plan(value, options).render(value, TargetKind::String)? {
        Some(text) => Ok(text.into_owned()),
        None => fallback::<String>(options),
    }
}
