//! Runtime environment mapping variable names to values

mod prelude;

pub use prelude::Intrinsic;

use std::fmt;
use std::sync::Arc;

use crate::value::{BuiltinFn, Value};

/// One binding in the chain.
struct Frame {
    name: String,
    value: Value,
    parent: Environment,
}

/// The runtime environment: a persistent, immutable mapping from names to
/// values.
///
/// Environments form a chain of shared frames. [`extend`](Self::extend)
/// allocates one frame and points it at the existing chain, so extension never
/// copies or mutates the parent, and cloning an environment is a reference
/// count increment.
///
/// # Example
///
/// ```
/// use sprig::{Environment, Value};
///
/// let outer = Environment::new().extend("x", Value::Int(1));
/// let inner = outer.extend("x", Value::Int(10)).extend("y", Value::Int(2));
///
/// assert_eq!(inner.lookup("x"), Some(&Value::Int(10))); // Shadows outer x
/// assert_eq!(inner.lookup("y"), Some(&Value::Int(2)));
///
/// // The parent is untouched
/// assert_eq!(outer.lookup("x"), Some(&Value::Int(1)));
/// assert_eq!(outer.lookup("y"), None);
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Frame>>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self { head: None }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extension
    // ═══════════════════════════════════════════════════════════════════

    /// Return a new environment where `name` maps to `value`.
    ///
    /// Any earlier binding of `name` is shadowed, not replaced; `self` is
    /// left unchanged.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self {
            head: Some(Arc::new(Frame {
                name: name.into(),
                value,
                parent: self.clone(),
            })),
        }
    }

    /// Bind `name` in this handle.
    ///
    /// Equivalent to `*self = self.extend(name, value)`; other handles that
    /// share the old chain do not see the new binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        *self = self.extend(name, value);
    }

    /// Register a built-in function under its own name.
    pub fn define_builtin(&mut self, builtin: BuiltinFn) {
        let name = builtin.name.clone();
        self.define(name, Value::Builtin(builtin));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up the most recent binding of `name`.
    ///
    /// Returns `None` if the name is not bound.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames()
            .find(|frame| frame.name == name)
            .map(|frame| &frame.value)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    fn frames(&self) -> impl Iterator<Item = &Frame> {
        let mut next = self.head.as_deref();
        std::iter::from_fn(move || {
            let frame = next?;
            next = frame.parent.head.as_deref();
            Some(frame)
        })
    }

    /// All bound names, most recent first. Shadowed names appear once per
    /// binding.
    pub fn names(&self) -> Vec<&str> {
        self.frames().map(|frame| frame.name.as_str()).collect()
    }

    /// Get the number of bindings, shadowed ones included.
    pub fn len(&self) -> usize {
        self.frames().count()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Check whether two handles point at the same chain.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Names only; closure values would print their own captures
        f.debug_tuple("Environment").field(&self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
        assert_eq!(env.lookup("x"), None);
    }

    #[test]
    fn test_extend_shares_parent() {
        let parent = Environment::new().extend("a", Value::Int(1));
        let child = parent.extend("b", Value::Int(2));

        let shared = child.head.as_ref().map(|frame| &frame.parent);
        assert!(shared.is_some_and(|p| p.ptr_eq(&parent)));
    }

    #[test]
    fn test_define_rebinds_handle_only() {
        let mut env = Environment::new().extend("x", Value::Int(1));
        let snapshot = env.clone();
        env.define("x", Value::Int(2));

        assert_eq!(env.lookup("x"), Some(&Value::Int(2)));
        assert_eq!(snapshot.lookup("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_lookup_finds_most_recent() {
        let env = Environment::new()
            .extend("f", Value::Int(0))
            .extend("g", Value::Int(1))
            .extend("f", Value::Int(7));
        assert_eq!(env.lookup("f"), Some(&Value::Int(7)));
        assert_eq!(env.lookup("g"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_names_most_recent_first() {
        let env = Environment::new()
            .extend("a", Value::Int(1))
            .extend("b", Value::Int(2))
            .extend("a", Value::Int(3));
        assert_eq!(env.names(), vec!["a", "b", "a"]);
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_debug_lists_names() {
        let env = Environment::new().extend("x", Value::Int(1));
        assert_eq!(format!("{:?}", env), "Environment([\"x\"])");
    }
}
