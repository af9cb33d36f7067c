//! Per-target glue shared by every coercion: zero value and fallback lookup.

use crate::types::{CoerceError, Fallback, Options, TargetKind};

pub(crate) trait Target: Sized + Default {
    const KIND: TargetKind;
    /// Rust type a fallback must carry, for error messages.
    const TYPE_NAME: &'static str;

    fn from_fallback(fallback: &Fallback) -> Option<Self>;
}

/// The result for a nil input: the configured fallback or the zero value.
pub(crate) fn fallback<T: Target>(options: &Options) -> Result<T, CoerceError> {
    match options.fallback() {
        None => Ok(T::default()),
        Some(fallback) => match T::from_fallback(fallback) {
            Some(value) => {
                log::debug!("Using {} fallback {}", T::KIND, fallback);
                Ok(value)
            }
            None => {
                log::debug!(
                    "Rejecting {} fallback {} for {} coercion",
                    fallback.kind(),
                    fallback,
                    T::KIND
                );
                Err(CoerceError::invalid_fallback(fallback, T::TYPE_NAME))
            }
        },
    }
}

impl Target for isize {
    const KIND: TargetKind = TargetKind::Int;
    const TYPE_NAME: &'static str = "isize";

    fn from_fallback(fallback: &Fallback) -> Option<Self> {
        match fallback {
            Fallback::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl Target for usize {
    const KIND: TargetKind = TargetKind::Uint;
    const TYPE_NAME: &'static str = "usize";

    fn from_fallback(fallback: &Fallback) -> Option<Self> {
        match fallback {
            Fallback::Uint(n) => Some(*n),
            _ => None,
        }
    }
}

impl Target for f64 {
    const KIND: TargetKind = TargetKind::Float;
    const TYPE_NAME: &'static str = "f64";

    fn from_fallback(fallback: &Fallback) -> Option<Self> {
        match fallback {
            Fallback::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl Target for String {
    const KIND: TargetKind = TargetKind::String;
    const TYPE_NAME: &'static str = "String";

    fn from_fallback(fallback: &Fallback) -> Option<Self> {
        match fallback {
            Fallback::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}
