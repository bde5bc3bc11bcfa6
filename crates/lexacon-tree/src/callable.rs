//! Callable entry values.

use std::fmt::{self, Display};
use std::sync::Arc;

type FormatFn = dyn Fn(&[&dyn Display]) -> String + Send + Sync;

/// A function leaf that produces text from caller-supplied arguments.
///
/// Callables are opaque to merging and lookup: they are carried through the
/// tree as atomic values and handed back to the caller unchanged. Cloning is
/// cheap and equality is identity, so a resolved callable compares equal to
/// the one stored in the dictionary.
#[derive(Clone)]
pub struct Callable {
    func: Arc<FormatFn>,
}

impl Callable {
    /// Wrap a formatting function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[&dyn Display]) -> String + Send + Sync + 'static,
    {
        Self { func: Arc::new(func) }
    }

    /// Invoke the function with the given arguments.
    pub fn call(&self, args: &[&dyn Display]) -> String {
        (self.func)(args)
    }

    /// Whether both handles point at the same function.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_formats_arguments() {
        let km = Callable::new(|args| format!("{} km", args[0]));
        assert_eq!(km.call(&[&42]), "42 km");
    }

    #[test]
    fn test_clone_is_identical() {
        let a = Callable::new(|_| "a".to_string());
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_functions_differ() {
        let a = Callable::new(|_| "same".to_string());
        let b = Callable::new(|_| "same".to_string());
        assert_ne!(a, b);
    }
}
