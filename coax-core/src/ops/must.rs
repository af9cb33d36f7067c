//! Panicking variants of the coercions.
//!
//! Each function unwinds with the [`CoerceError`](crate::CoerceError) as its
//! payload, so [`try_catch`](crate::try_catch) and [`maybe`](crate::maybe)
//! can recover it unchanged. The unwind starts with `resume_unwind`, so the
//! panic hook does not run and nothing is printed.

use crate::types::{Options, Value};

macro_rules! impl_must {
    ($($name:ident -> $t:ty;)*) => {$(
        #[doc = concat!("Like [`", stringify!($name), "`](crate::", stringify!($name), ").")]
        ///
        /// Unwinds with the error on failure.
        pub fn $name(value: &Value<'_>, options: &Options) -> $t {
            match crate::ops::$name(value, options) {
                Ok(v) => v,
                Err(err) => std::panic::resume_unwind(Box::new(err)),
            }
        }
    )*};
}

impl_must! {
    int -> isize;
    uint -> usize;
    float -> f64;
    string -> String;
}
