//! Coercion error types.
//!
//! This module provides error handling using `exn` for context-aware errors
//! while preserving stable `error_type()` strings for callers that match on
//! failure categories.

use std::fmt;

use super::kind::TargetKind;
use super::options::Fallback;
use super::value::{BoxError, Value};

/// Error kind enum for coercion operations.
///
/// Each variant corresponds to a specific failure condition and maps to a
/// stable `error_type()` string.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// No resolution path matched the input, or a capability used while
    /// resolving it failed.
    #[error(
        "cannot coerce value {value} of type {type_name} to {target}{}",
        cause_suffix(.cause)
    )]
    InvalidValue {
        value: String,
        type_name: String,
        target: TargetKind,
        #[source]
        cause: Option<BoxError>,
    },
    /// A fallback of the wrong kind was configured for this operation.
    #[error("invalid fallback value: {value} (a {kind} fallback), must be {expected}")]
    InvalidFallback {
        value: String,
        kind: TargetKind,
        expected: &'static str,
    },
    /// A panic captured by `try_catch` whose payload was not a coercion error.
    #[error("panic: {message}")]
    Panic {
        message: String,
        #[source]
        payload: Option<BoxError>,
    },
    /// A coercion policy could not be parsed or written.
    #[error("config error: {message}")]
    ConfigError { message: String },
    /// I/O error while reading or writing a policy file.
    #[error("io error: {message}")]
    IoError { message: String },
}

fn cause_suffix(cause: &Option<BoxError>) -> String {
    match cause {
        Some(cause) => format!("; {cause}"),
        None => String::new(),
    }
}

impl ErrorKind {
    /// Get the error type as a string.
    ///
    /// These strings are stable and must not change.
    pub fn error_type(&self) -> &'static str {
        match self {
            ErrorKind::InvalidValue { .. } => "invalid_value",
            ErrorKind::InvalidFallback { .. } => "invalid_fallback",
            ErrorKind::Panic { .. } => "panic",
            ErrorKind::ConfigError { .. } => "config_error",
            ErrorKind::IoError { .. } => "io_error",
        }
    }
}

/// Main error type for coercion operations.
///
/// This wraps `exn::Exn<ErrorKind>` to provide context-aware error handling
/// while maintaining the stable `error_type()` interface.
#[derive(Debug)]
pub struct CoerceError(exn::Exn<ErrorKind>);

impl CoerceError {
    /// Create a new error from an error kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self(exn::Exn::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_error()
    }

    /// Get the error type as a string.
    pub fn error_type(&self) -> &'static str {
        self.kind().error_type()
    }

    /// The target kind of a failed coercion, if this is an invalid value.
    pub fn target(&self) -> Option<TargetKind> {
        match self.kind() {
            ErrorKind::InvalidValue { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// The error that caused this one, if any.
    ///
    /// Same as [`source`](std::error::Error::source) but keeps the `Send + Sync`
    /// bounds, which is handy for downcasting.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self.kind() {
            ErrorKind::InvalidValue { cause, .. } => cause.as_deref(),
            ErrorKind::Panic { payload, .. } => payload.as_deref(),
            _ => None,
        }
    }

    // Convenience constructors for common error types

    /// Create an "invalid value" error with no underlying cause.
    pub fn invalid(value: &Value<'_>, target: TargetKind) -> Self {
        Self::new(ErrorKind::InvalidValue {
            value: value.to_string(),
            type_name: value.type_name(),
            target,
            cause: None,
        })
    }

    /// Create an "invalid value" error caused by a failed parse or marshal.
    pub fn invalid_with_cause(
        value: &Value<'_>,
        target: TargetKind,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::new(ErrorKind::InvalidValue {
            value: value.to_string(),
            type_name: value.type_name(),
            target,
            cause: Some(cause.into()),
        })
    }

    /// Create an "invalid fallback" error.
    pub fn invalid_fallback(fallback: &Fallback, expected: &'static str) -> Self {
        Self::new(ErrorKind::InvalidFallback {
            value: fallback.to_string(),
            kind: fallback.kind(),
            expected,
        })
    }

    /// Create a "panic" error from a rendered panic payload.
    pub fn panic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Panic {
            message: message.into(),
            payload: None,
        })
    }

    /// Create a "panic" error whose payload was itself an error.
    pub fn panic_with_payload(payload: BoxError) -> Self {
        Self::new(ErrorKind::Panic {
            message: payload.to_string(),
            payload: Some(payload),
        })
    }

    /// Create a "config error".
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigError {
            message: message.into(),
        })
    }

    /// Check if this is an InvalidValue error.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidValue { .. })
    }

    /// Check if this is an InvalidFallback error.
    pub fn is_invalid_fallback(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidFallback { .. })
    }

    /// Check if this is a Panic error.
    pub fn is_panic(&self) -> bool {
        matches!(self.kind(), ErrorKind::Panic { .. })
    }

    /// Check if this is a ConfigError.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::ConfigError { .. })
    }
}

impl fmt::Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl std::error::Error for CoerceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.kind())
    }
}

// Conversion from common error types

impl From<std::io::Error> for CoerceError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::IoError {
            message: e.to_string(),
        })
    }
}

#[cfg(feature = "toml-config")]
impl From<toml::de::Error> for CoerceError {
    fn from(e: toml::de::Error) -> Self {
        Self::config_error(e.to_string())
    }
}

#[cfg(feature = "toml-config")]
impl From<toml::ser::Error> for CoerceError {
    fn from(e: toml::ser::Error) -> Self {
        Self::config_error(e.to_string())
    }
}
