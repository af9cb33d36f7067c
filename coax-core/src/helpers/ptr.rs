//! Pointer helpers.

/// Returns a pointer to `v`.
pub fn ptr<T>(v: T) -> Box<T> {
    Box::new(v)
}

/// Dereferences `p` if present, otherwise returns the zero value.
pub fn value<T: Clone + Default>(p: Option<&T>) -> T {
    p.cloned().unwrap_or_default()
}

/// Dereferences `p` if present, otherwise returns `fallback`.
pub fn value_or<T: Clone>(p: Option<&T>, fallback: T) -> T {
    p.cloned().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_pointer() {
        let p = ptr(42);
        assert_eq!(value(Some(&*p)), 42);
        assert_eq!(value_or(Some(&*p), 7), 42);
    }

    #[test]
    fn nil_pointers() {
        assert_eq!(value::<String>(None), "");
        assert_eq!(value_or(None, 7), 7);
    }
}
