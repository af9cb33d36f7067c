//! Turning panics back into errors.
//!
//! The coercion functions return `Result`. Pipelines that prefer to abort use
//! the [`must`](crate::must) variants, which panic with the [`CoerceError`]
//! as payload; [`try_catch`] and [`maybe`] recover such panics at a boundary.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use crate::types::{BoxError, CoerceError, Options, Value};

/// Run `f`, converting a panic into an error.
///
/// A `CoerceError` payload is returned as-is; a boxed error payload becomes
/// the source of a panic error; anything else is rendered into one.
///
/// ```
/// use coax_core::{must, try_catch, Options, Value};
///
/// let err = try_catch(|| must::int(&Value::from("cat"), &Options::new())).unwrap_err();
/// assert!(err.is_invalid_value());
///
/// let err = try_catch(|| panic!("abcdef")).unwrap_err();
/// assert_eq!(err.to_string(), "panic: abcdef");
/// ```
pub fn try_catch<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, CoerceError> {
    panic::catch_unwind(f).map_err(from_panic)
}

/// Run a panicking coercion such as [`must::int`](crate::must::int), returning
/// its error instead of unwinding.
///
/// ```
/// use coax_core::{maybe, must, Options, Value};
///
/// let err = maybe(must::int, &Value::from("cat"), &Options::new()).unwrap_err();
/// assert!(err.to_string().contains("cat"));
/// assert!(err.to_string().contains("int"));
/// ```
pub fn maybe<'a, T>(
    op: impl FnOnce(&Value<'a>, &Options) -> T,
    value: &Value<'a>,
    options: &Options,
) -> Result<T, CoerceError> {
    // Coercions keep no state, so nothing is left half-updated by an unwind.
    try_catch(AssertUnwindSafe(|| op(value, options)))
}

fn from_panic(payload: Box<dyn Any + Send>) -> CoerceError {
    let payload = match payload.downcast::<CoerceError>() {
        Ok(err) => return *err,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<BoxError>() {
        Ok(err) => return CoerceError::panic_with_payload(*err),
        Err(payload) => payload,
    };
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        CoerceError::panic(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        CoerceError::panic(message.clone())
    } else {
        CoerceError::panic("Box<dyn Any>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::must;
    use crate::types::TargetKind;
    use std::cell::Cell;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct TestError;

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("test error")
        }
    }

    impl Error for TestError {}

    #[test]
    fn coerce_errors_pass_through_unchanged() {
        let err = try_catch(|| {
            std::panic::panic_any(CoerceError::invalid(&Value::from("x"), TargetKind::Float))
        })
        .unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.target(), Some(TargetKind::Float));
    }

    #[test]
    fn boxed_errors_become_the_source() {
        let boxed = || std::panic::panic_any(BoxError::from(TestError));
        let err = try_catch(boxed).unwrap_err();
        assert!(err.is_panic());
        assert!(err.source().unwrap().downcast_ref::<TestError>().is_some());
        assert_eq!(err.to_string(), "panic: test error");
    }

    #[test]
    fn other_payloads_are_wrapped() {
        let err = try_catch(|| panic!("abcdef")).unwrap_err();
        assert!(err.is_panic());
        assert!(err.to_string().contains("panic:"));

        let err = try_catch(|| panic!("{}", 12)).unwrap_err();
        assert_eq!(err.to_string(), "panic: 12");

        let err = try_catch(|| std::panic::panic_any(7u8)).unwrap_err();
        assert_eq!(err.error_type(), "panic");
    }

    #[test]
    fn no_panic() {
        assert_eq!(try_catch(|| 5).unwrap(), 5);
    }

    thread_local! {
        static HOOK_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    #[test]
    fn must_unwinds_without_the_panic_hook() {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| HOOK_CALLS.with(|n| n.set(n.get() + 1))));
        let cat = Value::from("cat");
        let err = maybe(must::int, &cat, &Options::new()).unwrap_err();
        let hooked = try_catch(|| panic!("hooked")).unwrap_err();
        panic::set_hook(previous);

        assert!(err.is_invalid_value());
        assert!(hooked.is_panic());
        assert_eq!(HOOK_CALLS.with(Cell::get), 1);
    }

    #[test]
    fn maybe_returns_result_or_error() {
        let options = Options::new();
        let n = Value::from(123i32);
        assert_eq!(maybe(must::int, &n, &options).unwrap(), 123);

        let err = maybe(must::int, &Value::from("cat"), &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot coerce value cat of type &str to int"
        );

        let wrong = options.with_fallback(1.0);
        let err = maybe(must::string, &Value::Nil, &wrong).unwrap_err();
        assert!(err.is_invalid_fallback());
    }
}
